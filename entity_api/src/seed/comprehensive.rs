//! The larger demo data set: ten members, ten projects and fifty tasks, with history
//! spread over the past months so every list and chart screen has something to show.
//!
//! Timestamps are relative to `now`. A task created `days_old` days ago is due
//! `30 - days_old` days from now, so older tasks are already overdue.

use chrono::{Duration, NaiveDate};

use entity::billing_plans;
use entity::organizations::{self, Settings, WorkingHours};
use entity::priority::Priority;
use entity::roles::Role;
use entity::status::{ProjectStatus, TaskStatus};
use entity::{members, projects, tasks, Timestamp};

use super::{strings, Catalogue, BILLING_PLAN_ID, ORGANIZATION_ID, OWNER_ID};

/// id, email, name, role, avatar image, days since joining
type MemberRow = (&'static str, &'static str, &'static str, Role, u8, i64);

/// id, name, description, status, member ids, created by, days since created, days since updated
type ProjectRow = (
    &'static str,
    &'static str,
    &'static str,
    ProjectStatus,
    &'static [&'static str],
    &'static str,
    i64,
    i64,
);

/// title, description, project, assignee, status, priority, days since created, tags
type TaskRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    TaskStatus,
    Priority,
    i64,
    &'static [&'static str],
);

const MEMBERS: [MemberRow; 10] = [
    (OWNER_ID, "john@acme.com", "John Doe", Role::Owner, 12, 180),
    ("user_01HQ3XK456", "jane@acme.com", "Jane Smith", Role::Admin, 5, 170),
    ("user_01HQ3XK789", "bob@acme.com", "Bob Johnson", Role::Member, 33, 160),
    ("user_01HQ3XK012", "alice@acme.com", "Alice Williams", Role::Member, 9, 150),
    ("user_01HQ3XK345", "charlie@acme.com", "Charlie Brown", Role::Member, 7, 140),
    ("user_01HQ3XK678", "diana@acme.com", "Diana Martinez", Role::Member, 44, 130),
    ("user_01HQ3XK901", "evan@acme.com", "Evan Taylor", Role::Member, 15, 120),
    ("user_01HQ3XK234", "fiona@acme.com", "Fiona Chen", Role::Member, 20, 110),
    ("user_01HQ3XK567", "george@acme.com", "George Wilson", Role::Admin, 52, 100),
    ("user_01HQ3XK890", "hannah@acme.com", "Hannah Lee", Role::Viewer, 26, 90),
];

const PROJECTS: [ProjectRow; 10] = [
    (
        "proj_website_redesign",
        "Website Redesign",
        "Complete overhaul of the company website with modern design and improved UX",
        ProjectStatus::Active,
        &[OWNER_ID, "user_01HQ3XK456", "user_01HQ3XK789", "user_01HQ3XK012"],
        OWNER_ID,
        90,
        1,
    ),
    (
        "proj_mobile_app",
        "Mobile App Development",
        "Native iOS and Android apps for customer engagement",
        ProjectStatus::Active,
        &["user_01HQ3XK456", "user_01HQ3XK789", "user_01HQ3XK012", "user_01HQ3XK345"],
        OWNER_ID,
        120,
        2,
    ),
    (
        "proj_crm_integration",
        "CRM Integration",
        "Integrate with Salesforce and HubSpot for better customer data",
        ProjectStatus::Active,
        &["user_01HQ3XK012", "user_01HQ3XK345", "user_01HQ3XK678"],
        "user_01HQ3XK456",
        80,
        3,
    ),
    (
        "proj_api_v2",
        "API v2 Development",
        "Build next generation REST API with GraphQL support",
        ProjectStatus::Active,
        &["user_01HQ3XK789", "user_01HQ3XK901", "user_01HQ3XK234"],
        "user_01HQ3XK567",
        60,
        1,
    ),
    (
        "proj_analytics_dashboard",
        "Analytics Dashboard",
        "Real-time analytics and reporting dashboard for business insights",
        ProjectStatus::Active,
        &["user_01HQ3XK234", "user_01HQ3XK567", "user_01HQ3XK678"],
        "user_01HQ3XK456",
        70,
        2,
    ),
    (
        "proj_security_audit",
        "Security Audit & Compliance",
        "SOC 2 compliance and comprehensive security audit",
        ProjectStatus::Active,
        &["user_01HQ3XK567", "user_01HQ3XK456", OWNER_ID],
        OWNER_ID,
        50,
        3,
    ),
    (
        "proj_q1_marketing",
        "Q1 Marketing Campaign",
        "Launch new product marketing campaign for Q1",
        ProjectStatus::Completed,
        &[OWNER_ID, "user_01HQ3XK012", "user_01HQ3XK678"],
        OWNER_ID,
        150,
        30,
    ),
    (
        "proj_infrastructure",
        "Infrastructure Modernization",
        "Migrate to Kubernetes and implement GitOps workflows",
        ProjectStatus::Active,
        &["user_01HQ3XK901", "user_01HQ3XK789", "user_01HQ3XK345"],
        "user_01HQ3XK567",
        100,
        5,
    ),
    (
        "proj_customer_portal",
        "Customer Self-Service Portal",
        "Build customer-facing portal for account management and support",
        ProjectStatus::Active,
        &["user_01HQ3XK012", "user_01HQ3XK234", "user_01HQ3XK456"],
        "user_01HQ3XK456",
        40,
        1,
    ),
    (
        "proj_ai_features",
        "AI-Powered Features",
        "Integrate ML models for predictive analytics and smart recommendations",
        ProjectStatus::Active,
        &["user_01HQ3XK234", "user_01HQ3XK567", "user_01HQ3XK901"],
        OWNER_ID,
        30,
        0,
    ),
];

const TASKS: [TaskRow; 50] = [
        (
            "Design homepage mockups",
            "Create 3 design variations for new homepage in Figma",
            "proj_website_redesign",
            "user_01HQ3XK456",
            TaskStatus::Done,
            Priority::High,
            45,
            &["design", "homepage"],
        ),
        (
            "Implement responsive navigation",
            "Build mobile-friendly navigation menu",
            "proj_website_redesign",
            "user_01HQ3XK789",
            TaskStatus::Done,
            Priority::High,
            40,
            &["frontend", "responsive"],
        ),
        (
            "Optimize image loading",
            "Implement lazy loading and WebP format",
            "proj_website_redesign",
            "user_01HQ3XK789",
            TaskStatus::InProgress,
            Priority::Medium,
            35,
            &["performance", "images"],
        ),
        (
            "SEO audit and improvements",
            "Conduct full SEO audit and implement changes",
            "proj_website_redesign",
            "user_01HQ3XK012",
            TaskStatus::InProgress,
            Priority::Medium,
            30,
            &["seo", "marketing"],
        ),
        (
            "Accessibility compliance",
            "Ensure WCAG 2.1 AA compliance across all pages",
            "proj_website_redesign",
            "user_01HQ3XK456",
            TaskStatus::Todo,
            Priority::High,
            25,
            &["a11y", "compliance"],
        ),
        (
            "CMS migration",
            "Migrate content from old CMS to new platform",
            "proj_website_redesign",
            "user_01HQ3XK012",
            TaskStatus::Todo,
            Priority::Urgent,
            20,
            &["cms", "migration"],
        ),
        (
            "Analytics integration",
            "Set up GA4 and custom event tracking",
            "proj_website_redesign",
            "user_01HQ3XK789",
            TaskStatus::Todo,
            Priority::Medium,
            15,
            &["analytics"],
        ),
        (
            "Performance testing",
            "Load testing and optimization for 10k concurrent users",
            "proj_website_redesign",
            "user_01HQ3XK789",
            TaskStatus::Todo,
            Priority::Low,
            10,
            &["testing", "performance"],
        ),
        (
            "Setup React Native project",
            "Initialize React Native project with Expo",
            "proj_mobile_app",
            "user_01HQ3XK789",
            TaskStatus::Done,
            Priority::Urgent,
            80,
            &["setup", "react-native"],
        ),
        (
            "Design app navigation flow",
            "Create user flow diagrams for main app navigation",
            "proj_mobile_app",
            "user_01HQ3XK456",
            TaskStatus::Done,
            Priority::High,
            75,
            &["design", "ux"],
        ),
        (
            "Implement user authentication",
            "Add OAuth login with Google and Apple Sign In",
            "proj_mobile_app",
            "user_01HQ3XK012",
            TaskStatus::InProgress,
            Priority::Urgent,
            70,
            &["auth", "security"],
        ),
        (
            "Build push notification system",
            "Integrate Firebase Cloud Messaging",
            "proj_mobile_app",
            "user_01HQ3XK012",
            TaskStatus::InProgress,
            Priority::High,
            65,
            &["notifications", "firebase"],
        ),
        (
            "Offline mode support",
            "Implement local storage and sync mechanisms",
            "proj_mobile_app",
            "user_01HQ3XK345",
            TaskStatus::InProgress,
            Priority::Medium,
            60,
            &["offline", "sync"],
        ),
        (
            "App store submission",
            "Prepare builds and submit to App Store and Play Store",
            "proj_mobile_app",
            "user_01HQ3XK456",
            TaskStatus::Todo,
            Priority::High,
            55,
            &["deployment"],
        ),
        (
            "Beta testing program",
            "Recruit 100 beta testers and gather feedback",
            "proj_mobile_app",
            "user_01HQ3XK012",
            TaskStatus::Todo,
            Priority::Medium,
            50,
            &["testing", "beta"],
        ),
        (
            "App analytics dashboard",
            "Build internal dashboard for app usage metrics",
            "proj_mobile_app",
            "user_01HQ3XK789",
            TaskStatus::Todo,
            Priority::Low,
            45,
            &["analytics"],
        ),
        (
            "Setup Salesforce API credentials",
            "Obtain and configure Salesforce API access",
            "proj_crm_integration",
            "user_01HQ3XK012",
            TaskStatus::Done,
            Priority::High,
            50,
            &["salesforce", "api"],
        ),
        (
            "Build data sync pipeline",
            "Create ETL pipeline for bi-directional CRM sync",
            "proj_crm_integration",
            "user_01HQ3XK012",
            TaskStatus::InProgress,
            Priority::Urgent,
            45,
            &["backend", "etl"],
        ),
        (
            "Test data synchronization",
            "Comprehensive testing of data sync",
            "proj_crm_integration",
            "user_01HQ3XK345",
            TaskStatus::Todo,
            Priority::High,
            40,
            &["testing", "qa"],
        ),
        (
            "Error handling and retry logic",
            "Implement robust error handling",
            "proj_crm_integration",
            "user_01HQ3XK678",
            TaskStatus::Todo,
            Priority::Medium,
            35,
            &["backend", "reliability"],
        ),
        (
            "Documentation and training",
            "Create docs and train sales team",
            "proj_crm_integration",
            "user_01HQ3XK345",
            TaskStatus::Todo,
            Priority::Low,
            30,
            &["docs", "training"],
        ),
        (
            "API design specification",
            "Design OpenAPI 3.0 specification",
            "proj_api_v2",
            "user_01HQ3XK789",
            TaskStatus::Done,
            Priority::High,
            40,
            &["api", "design"],
        ),
        (
            "Implement GraphQL schema",
            "Build GraphQL schema with resolvers",
            "proj_api_v2",
            "user_01HQ3XK901",
            TaskStatus::InProgress,
            Priority::High,
            35,
            &["graphql", "backend"],
        ),
        (
            "Authentication middleware",
            "JWT and OAuth2 authentication",
            "proj_api_v2",
            "user_01HQ3XK234",
            TaskStatus::InProgress,
            Priority::Urgent,
            30,
            &["auth", "security"],
        ),
        (
            "Rate limiting implementation",
            "Implement rate limiting per client",
            "proj_api_v2",
            "user_01HQ3XK789",
            TaskStatus::Todo,
            Priority::Medium,
            25,
            &["backend", "security"],
        ),
        (
            "API documentation portal",
            "Build interactive API docs with Swagger UI",
            "proj_api_v2",
            "user_01HQ3XK234",
            TaskStatus::Todo,
            Priority::Medium,
            20,
            &["docs"],
        ),
        (
            "Versioning strategy",
            "Implement API versioning and deprecation policy",
            "proj_api_v2",
            "user_01HQ3XK901",
            TaskStatus::Todo,
            Priority::Low,
            15,
            &["api", "strategy"],
        ),
        (
            "Design dashboard layouts",
            "Create wireframes for 5 key dashboards",
            "proj_analytics_dashboard",
            "user_01HQ3XK234",
            TaskStatus::Done,
            Priority::High,
            45,
            &["design", "ux"],
        ),
        (
            "Implement real-time data pipeline",
            "Setup WebSocket connections for live data",
            "proj_analytics_dashboard",
            "user_01HQ3XK567",
            TaskStatus::InProgress,
            Priority::Urgent,
            40,
            &["backend", "realtime"],
        ),
        (
            "Build chart library",
            "Custom chart components with D3.js",
            "proj_analytics_dashboard",
            "user_01HQ3XK678",
            TaskStatus::InProgress,
            Priority::High,
            35,
            &["frontend", "charts"],
        ),
        (
            "Data export functionality",
            "Enable CSV/PDF export of reports",
            "proj_analytics_dashboard",
            "user_01HQ3XK234",
            TaskStatus::Todo,
            Priority::Medium,
            30,
            &["feature"],
        ),
        (
            "Scheduled reports",
            "Automated daily/weekly email reports",
            "proj_analytics_dashboard",
            "user_01HQ3XK567",
            TaskStatus::Todo,
            Priority::Low,
            25,
            &["automation"],
        ),
        (
            "Vulnerability scanning",
            "Run automated security scans on all systems",
            "proj_security_audit",
            "user_01HQ3XK567",
            TaskStatus::InProgress,
            Priority::Urgent,
            30,
            &["security", "audit"],
        ),
        (
            "Penetration testing",
            "Third-party pentest of production systems",
            "proj_security_audit",
            "user_01HQ3XK456",
            TaskStatus::Todo,
            Priority::Urgent,
            25,
            &["security", "testing"],
        ),
        (
            "SOC 2 documentation",
            "Prepare all required SOC 2 documentation",
            "proj_security_audit",
            "user_01HQ3XK123",
            TaskStatus::Todo,
            Priority::High,
            20,
            &["compliance", "docs"],
        ),
        (
            "Security training",
            "Mandatory security training for all engineers",
            "proj_security_audit",
            "user_01HQ3XK567",
            TaskStatus::Todo,
            Priority::Medium,
            15,
            &["training", "security"],
        ),
        (
            "Launch social media campaign",
            "Execute multi-channel social media campaign",
            "proj_q1_marketing",
            "user_01HQ3XK012",
            TaskStatus::Done,
            Priority::Medium,
            120,
            &["marketing", "social"],
        ),
        (
            "Email marketing sequence",
            "Build 5-email drip campaign",
            "proj_q1_marketing",
            "user_01HQ3XK678",
            TaskStatus::Done,
            Priority::Medium,
            115,
            &["marketing", "email"],
        ),
        (
            "Campaign analytics report",
            "Analyze campaign performance and ROI",
            "proj_q1_marketing",
            "user_01HQ3XK012",
            TaskStatus::Done,
            Priority::Low,
            110,
            &["analytics", "reporting"],
        ),
        (
            "Kubernetes cluster setup",
            "Deploy production K8s cluster on AWS EKS",
            "proj_infrastructure",
            "user_01HQ3XK901",
            TaskStatus::Done,
            Priority::Urgent,
            60,
            &["devops", "kubernetes"],
        ),
        (
            "GitOps workflow implementation",
            "Setup ArgoCD for automated deployments",
            "proj_infrastructure",
            "user_01HQ3XK789",
            TaskStatus::InProgress,
            Priority::High,
            55,
            &["devops", "gitops"],
        ),
        (
            "Monitoring and alerting",
            "Deploy Prometheus and Grafana stack",
            "proj_infrastructure",
            "user_01HQ3XK345",
            TaskStatus::Todo,
            Priority::High,
            50,
            &["monitoring", "devops"],
        ),
        (
            "Disaster recovery plan",
            "Design and test DR procedures",
            "proj_infrastructure",
            "user_01HQ3XK901",
            TaskStatus::Todo,
            Priority::Medium,
            45,
            &["devops", "dr"],
        ),
        (
            "User authentication system",
            "Implement secure login and SSO",
            "proj_customer_portal",
            "user_01HQ3XK012",
            TaskStatus::InProgress,
            Priority::Urgent,
            25,
            &["auth", "frontend"],
        ),
        (
            "Account management UI",
            "Build account settings and billing pages",
            "proj_customer_portal",
            "user_01HQ3XK234",
            TaskStatus::InProgress,
            Priority::High,
            20,
            &["frontend", "ui"],
        ),
        (
            "Support ticket system",
            "Integrated ticketing and chat support",
            "proj_customer_portal",
            "user_01HQ3XK456",
            TaskStatus::Todo,
            Priority::Medium,
            15,
            &["feature", "support"],
        ),
        (
            "Knowledge base integration",
            "Searchable help docs and FAQs",
            "proj_customer_portal",
            "user_01HQ3XK012",
            TaskStatus::Todo,
            Priority::Low,
            10,
            &["docs", "support"],
        ),
        (
            "ML model training pipeline",
            "Setup automated model training workflow",
            "proj_ai_features",
            "user_01HQ3XK234",
            TaskStatus::InProgress,
            Priority::High,
            15,
            &["ml", "ai"],
        ),
        (
            "Recommendation engine",
            "Build collaborative filtering recommendation system",
            "proj_ai_features",
            "user_01HQ3XK567",
            TaskStatus::Todo,
            Priority::High,
            10,
            &["ml", "recommendations"],
        ),
        (
            "A/B testing framework",
            "Framework for testing ML model variants",
            "proj_ai_features",
            "user_01HQ3XK901",
            TaskStatus::Todo,
            Priority::Medium,
            5,
            &["ml", "testing"],
        ),
];

/// Builds the demo data set relative to `now`.
pub fn comprehensive_catalogue(now: Timestamp) -> Catalogue {
    let days_ago = |days: i64| now - Duration::days(days);

    let members = MEMBERS
        .iter()
        .map(|&(id, email, name, role, avatar, joined)| members::Model {
            id: id.to_owned(),
            email: email.to_owned(),
            name: name.to_owned(),
            role,
            organization_id: ORGANIZATION_ID.to_owned(),
            avatar_url: format!("https://i.pravatar.cc/150?img={avatar}"),
            invited_at: days_ago(joined),
            joined_at: Some(days_ago(joined)),
            deleted_at: None,
        })
        .collect::<Vec<_>>();

    let projects = PROJECTS
        .iter()
        .map(
            |&(id, name, description, status, member_ids, created_by, created, updated)| {
                projects::Model {
                    id: id.to_owned(),
                    name: name.to_owned(),
                    description: description.to_owned(),
                    organization_id: ORGANIZATION_ID.to_owned(),
                    status,
                    member_ids: strings(member_ids),
                    created_at: days_ago(created),
                    updated_at: days_ago(updated),
                    deleted_at: None,
                    created_by: created_by.to_owned(),
                }
            },
        )
        .collect();

    let tasks = TASKS
        .iter()
        .enumerate()
        .map(
            |(index, &(title, description, project_id, assignee_id, status, priority, age, tags))| {
                tasks::Model {
                    id: format!("task_{:03}", index + 1),
                    title: title.to_owned(),
                    description: description.to_owned(),
                    project_id: project_id.to_owned(),
                    assignee_id: Some(assignee_id.to_owned()),
                    status,
                    priority,
                    due_date: due_date(now, age),
                    tags: strings(tags),
                    created_at: days_ago(age),
                    updated_at: days_ago((age - 5).max(0)),
                    deleted_at: None,
                    created_by: OWNER_ID.to_owned(),
                }
            },
        )
        .collect();

    Catalogue {
        billing_plans: vec![billing_plans::Model {
            created_at: days_ago(365),
            updated_at: now,
            ..super::professional_plan(now)
        }],
        organizations: vec![organizations::Model {
            id: ORGANIZATION_ID.to_owned(),
            name: "Acme Corporation".to_owned(),
            slug: "acme-corp".to_owned(),
            billing_plan_id: BILLING_PLAN_ID.to_owned(),
            member_count: members.len() as u32,
            settings: Settings {
                timezone: "America/New_York".to_owned(),
                currency: "USD".to_owned(),
                working_hours: Some(WorkingHours {
                    start: "09:00".to_owned(),
                    end: "17:00".to_owned(),
                }),
            },
            created_at: days_ago(180),
            updated_at: now,
            deleted_at: None,
        }],
        members,
        projects,
        tasks,
    }
}

/// Thirty days after creation, as a calendar day.
fn due_date(now: Timestamp, days_old: i64) -> NaiveDate {
    (now + Duration::days(30 - days_old)).date_naive()
}
