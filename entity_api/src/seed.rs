//! Reference fixture data for a TeamHub development database, and the routine that
//! loads it into a [`DocumentStore`].
//!
//! The data set is one organization ("Acme Corporation") on the Professional plan with
//! five members, four projects and twelve tasks. Every record is stamped with the same
//! `now` so a seed run is reproducible when the caller pins the clock.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use log::*;

use entity::billing_plans::{self, Tier};
use entity::organizations::{self, Settings, WorkingHours};
use entity::priority::Priority;
use entity::roles::Role;
use entity::status::{ProjectStatus, TaskStatus};
use entity::{members, projects, tasks, Timestamp};

use service::config::SeedDataset;

use crate::error::Error;
use crate::store::{from_documents, to_documents, DocumentStore};

mod comprehensive;

pub use comprehensive::comprehensive_catalogue;

pub const ORGANIZATION_ID: &str = "org_01HQ3XJMR5E0987654321";
pub const BILLING_PLAN_ID: &str = "plan_pro";
/// The organization owner, used as the default credential subject.
pub const OWNER_ID: &str = "user_01HQ3XK123";

/// Every collection the seeder manages, in insertion order.
pub const COLLECTIONS: [&str; 5] = [
    billing_plans::COLLECTION,
    organizations::COLLECTION,
    members::COLLECTION,
    projects::COLLECTION,
    tasks::COLLECTION,
];

/// The complete fixture data set.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    pub billing_plans: Vec<billing_plans::Model>,
    pub organizations: Vec<organizations::Model>,
    pub members: Vec<members::Model>,
    pub projects: Vec<projects::Model>,
    pub tasks: Vec<tasks::Model>,
}

impl Catalogue {
    pub fn member(&self, id: &str) -> Option<&members::Model> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn organization(&self, id: &str) -> Option<&organizations::Model> {
        self.organizations
            .iter()
            .find(|organization| organization.id == id)
    }
}

/// What a seed run left in the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeedSummary {
    /// Document count per collection, keyed by collection name.
    pub counts: BTreeMap<String, u64>,
    pub tasks_by_status: BTreeMap<TaskStatus, u64>,
    pub tasks_by_priority: BTreeMap<Priority, u64>,
}

impl SeedSummary {
    pub fn count(&self, collection: &str) -> u64 {
        self.counts.get(collection).copied().unwrap_or(0)
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Collections:")?;
        for collection in COLLECTIONS {
            writeln!(f, "  {collection}: {}", self.count(collection))?;
        }
        writeln!(f, "Tasks by status:")?;
        for (status, count) in &self.tasks_by_status {
            writeln!(f, "  {status}: {count}")?;
        }
        writeln!(f, "Tasks by priority:")?;
        for (priority, count) in &self.tasks_by_priority {
            writeln!(f, "  {priority}: {count}")?;
        }
        Ok(())
    }
}

/// Clears every managed collection, then bulk-upserts the catalogue one collection at a
/// time. The first store error aborts the run and is returned unchanged.
pub async fn seed_database(
    store: &dyn DocumentStore,
    catalogue: &Catalogue,
) -> Result<SeedSummary, Error> {
    for collection in COLLECTIONS {
        let removed = store.delete_many(collection).await?;
        debug!("Cleared {removed} documents from {collection}");
    }
    info!("Cleared existing data");

    let batches = [
        (billing_plans::COLLECTION, to_documents(&catalogue.billing_plans)?),
        (organizations::COLLECTION, to_documents(&catalogue.organizations)?),
        (members::COLLECTION, to_documents(&catalogue.members)?),
        (projects::COLLECTION, to_documents(&catalogue.projects)?),
        (tasks::COLLECTION, to_documents(&catalogue.tasks)?),
    ];
    for (collection, documents) in batches {
        let outcome = store.bulk_upsert(collection, documents).await?;
        info!(
            "Seeded {collection}: {} inserted, {} replaced",
            outcome.inserted, outcome.replaced
        );
    }

    summarize(store).await
}

/// Reads back per-collection counts and the task breakdowns from the store.
pub async fn summarize(store: &dyn DocumentStore) -> Result<SeedSummary, Error> {
    let mut summary = SeedSummary::default();
    for collection in COLLECTIONS {
        summary
            .counts
            .insert(collection.to_owned(), store.count(collection).await?);
    }

    let stored: Vec<tasks::Model> = from_documents(store.find_all(tasks::COLLECTION).await?)?;
    for task in &stored {
        *summary.tasks_by_status.entry(task.status).or_default() += 1;
        *summary.tasks_by_priority.entry(task.priority).or_default() += 1;
    }
    Ok(summary)
}

/// Builds the catalogue for the selected data set.
pub fn dataset_catalogue(dataset: SeedDataset, now: Timestamp) -> Catalogue {
    match dataset {
        SeedDataset::Reference => catalogue(now),
        SeedDataset::Comprehensive => comprehensive_catalogue(now),
    }
}

/// Builds the reference data set with every timestamp set to `now`.
pub fn catalogue(now: Timestamp) -> Catalogue {
    Catalogue {
        billing_plans: vec![professional_plan(now)],
        organizations: vec![organizations::Model {
            id: ORGANIZATION_ID.to_owned(),
            name: "Acme Corporation".to_owned(),
            slug: "acme-corp".to_owned(),
            billing_plan_id: BILLING_PLAN_ID.to_owned(),
            member_count: 5,
            settings: Settings {
                timezone: "America/New_York".to_owned(),
                currency: "USD".to_owned(),
                working_hours: Some(WorkingHours {
                    start: "09:00".to_owned(),
                    end: "17:00".to_owned(),
                }),
            },
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }],
        members: vec![
            member(OWNER_ID, "john@acme.com", "John Doe", Role::Owner, 1, now),
            member("user_01HQ3XK456", "jane@acme.com", "Jane Smith", Role::Admin, 5, now),
            member("user_01HQ3XK789", "bob@acme.com", "Bob Johnson", Role::Member, 3, now),
            member("user_01HQ3XK012", "alice@acme.com", "Alice Williams", Role::Member, 9, now),
            member("user_01HQ3XK345", "charlie@acme.com", "Charlie Brown", Role::Viewer, 7, now),
        ],
        projects: vec![
            project(
                "proj_website_redesign",
                "Website Redesign",
                "Complete overhaul of the company website with modern design and improved UX",
                ProjectStatus::Active,
                &[OWNER_ID, "user_01HQ3XK456", "user_01HQ3XK789"],
                OWNER_ID,
                now,
            ),
            project(
                "proj_mobile_app",
                "Mobile App Development",
                "Native iOS and Android apps for customer engagement",
                ProjectStatus::Active,
                &["user_01HQ3XK456", "user_01HQ3XK789", "user_01HQ3XK012"],
                OWNER_ID,
                now,
            ),
            project(
                "proj_crm_integration",
                "CRM Integration",
                "Integrate with Salesforce and HubSpot for better customer data",
                ProjectStatus::Active,
                &["user_01HQ3XK012", "user_01HQ3XK345"],
                "user_01HQ3XK456",
                now,
            ),
            project(
                "proj_q1_marketing",
                "Q1 Marketing Campaign",
                "Launch new product marketing campaign for Q1",
                ProjectStatus::Completed,
                &[OWNER_ID, "user_01HQ3XK012"],
                OWNER_ID,
                now,
            ),
        ],
        tasks: vec![
            TaskSeed {
                id: "task_001",
                title: "Design new homepage mockups",
                description: "Create 3 design variations for the new homepage in Figma",
                project_id: "proj_website_redesign",
                assignee_id: Some("user_01HQ3XK456"),
                status: TaskStatus::Done,
                priority: Priority::High,
                due: (2026, 2, 15),
                tags: &["design", "homepage"],
                created_by: OWNER_ID,
            }
            .build(now),
            TaskSeed {
                id: "task_002",
                title: "Implement responsive navigation",
                description: "Build mobile-friendly navigation menu with hamburger icon",
                project_id: "proj_website_redesign",
                assignee_id: Some("user_01HQ3XK789"),
                status: TaskStatus::InProgress,
                priority: Priority::High,
                due: (2026, 2, 20),
                tags: &["frontend", "responsive"],
                created_by: OWNER_ID,
            }
            .build(now),
            TaskSeed {
                id: "task_003",
                title: "Optimize image loading",
                description: "Implement lazy loading and WebP format for all images",
                project_id: "proj_website_redesign",
                assignee_id: Some("user_01HQ3XK789"),
                status: TaskStatus::Todo,
                priority: Priority::Medium,
                due: (2026, 2, 25),
                tags: &["performance", "images"],
                created_by: "user_01HQ3XK456",
            }
            .build(now),
            TaskSeed {
                id: "task_004",
                title: "SEO audit and improvements",
                description: "Conduct full SEO audit and implement recommended changes",
                project_id: "proj_website_redesign",
                assignee_id: None,
                status: TaskStatus::Todo,
                priority: Priority::Medium,
                due: (2026, 3, 1),
                tags: &["seo", "marketing"],
                created_by: OWNER_ID,
            }
            .build(now),
            TaskSeed {
                id: "task_005",
                title: "Setup React Native project",
                description: "Initialize React Native project with Expo",
                project_id: "proj_mobile_app",
                assignee_id: Some("user_01HQ3XK789"),
                status: TaskStatus::Done,
                priority: Priority::Urgent,
                due: (2026, 2, 10),
                tags: &["setup", "react-native"],
                created_by: "user_01HQ3XK456",
            }
            .build(now),
            TaskSeed {
                id: "task_006",
                title: "Design app navigation flow",
                description: "Create user flow diagrams for main app navigation",
                project_id: "proj_mobile_app",
                assignee_id: Some("user_01HQ3XK456"),
                status: TaskStatus::InReview,
                priority: Priority::High,
                due: (2026, 2, 18),
                tags: &["design", "ux"],
                created_by: "user_01HQ3XK456",
            }
            .build(now),
            TaskSeed {
                id: "task_007",
                title: "Implement user authentication",
                description: "Add OAuth login with Google and Apple Sign In",
                project_id: "proj_mobile_app",
                assignee_id: Some("user_01HQ3XK012"),
                status: TaskStatus::InProgress,
                priority: Priority::Urgent,
                due: (2026, 2, 22),
                tags: &["auth", "security"],
                created_by: "user_01HQ3XK789",
            }
            .build(now),
            TaskSeed {
                id: "task_008",
                title: "Build push notification system",
                description: "Integrate Firebase Cloud Messaging for push notifications",
                project_id: "proj_mobile_app",
                assignee_id: Some("user_01HQ3XK012"),
                status: TaskStatus::Todo,
                priority: Priority::High,
                due: (2026, 2, 28),
                tags: &["notifications", "firebase"],
                created_by: "user_01HQ3XK456",
            }
            .build(now),
            TaskSeed {
                id: "task_009",
                title: "Setup Salesforce API credentials",
                description: "Obtain and configure Salesforce API access",
                project_id: "proj_crm_integration",
                assignee_id: Some("user_01HQ3XK012"),
                status: TaskStatus::Done,
                priority: Priority::High,
                due: (2026, 2, 12),
                tags: &["salesforce", "api"],
                created_by: "user_01HQ3XK456",
            }
            .build(now),
            TaskSeed {
                id: "task_010",
                title: "Build data sync pipeline",
                description: "Create ETL pipeline for bi-directional CRM data sync",
                project_id: "proj_crm_integration",
                assignee_id: Some("user_01HQ3XK012"),
                status: TaskStatus::InProgress,
                priority: Priority::Urgent,
                due: (2026, 2, 25),
                tags: &["backend", "etl"],
                created_by: "user_01HQ3XK012",
            }
            .build(now),
            TaskSeed {
                id: "task_011",
                title: "Test data synchronization",
                description: "Comprehensive testing of data sync with staging environment",
                project_id: "proj_crm_integration",
                assignee_id: None,
                status: TaskStatus::Todo,
                priority: Priority::High,
                due: (2026, 3, 5),
                tags: &["testing", "qa"],
                created_by: "user_01HQ3XK012",
            }
            .build(now),
            TaskSeed {
                id: "task_012",
                title: "Launch social media campaign",
                description: "Execute multi-channel social media campaign",
                project_id: "proj_q1_marketing",
                assignee_id: Some("user_01HQ3XK012"),
                status: TaskStatus::Done,
                priority: Priority::Medium,
                due: (2026, 1, 31),
                tags: &["marketing", "social"],
                created_by: OWNER_ID,
            }
            .build(now),
        ],
    }
}

fn professional_plan(now: Timestamp) -> billing_plans::Model {
    billing_plans::Model {
        id: BILLING_PLAN_ID.to_owned(),
        name: "Professional".to_owned(),
        tier: Tier::Pro,
        max_members: 50,
        max_projects: 100,
        features: strings(&["advanced_analytics", "priority_support", "custom_branding"]),
        price_monthly: 49.99,
        price_yearly: 499.99,
        created_at: now,
        updated_at: now,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn member(
    id: &str,
    email: &str,
    name: &str,
    role: Role,
    avatar: u8,
    now: Timestamp,
) -> members::Model {
    members::Model {
        id: id.to_owned(),
        email: email.to_owned(),
        name: name.to_owned(),
        role,
        organization_id: ORGANIZATION_ID.to_owned(),
        avatar_url: format!("https://i.pravatar.cc/150?img={avatar}"),
        invited_at: now,
        joined_at: Some(now),
        deleted_at: None,
    }
}

fn project(
    id: &str,
    name: &str,
    description: &str,
    status: ProjectStatus,
    member_ids: &[&str],
    created_by: &str,
    now: Timestamp,
) -> projects::Model {
    projects::Model {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        organization_id: ORGANIZATION_ID.to_owned(),
        status,
        member_ids: strings(member_ids),
        created_at: now,
        updated_at: now,
        deleted_at: None,
        created_by: created_by.to_owned(),
    }
}

struct TaskSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    project_id: &'static str,
    assignee_id: Option<&'static str>,
    status: TaskStatus,
    priority: Priority,
    due: (i32, u32, u32),
    tags: &'static [&'static str],
    created_by: &'static str,
}

impl TaskSeed {
    fn build(self, now: Timestamp) -> tasks::Model {
        let (year, month, day) = self.due;
        tasks::Model {
            id: self.id.to_owned(),
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            project_id: self.project_id.to_owned(),
            assignee_id: self.assignee_id.map(str::to_owned),
            status: self.status,
            priority: self.priority,
            // Fixture dates are literal calendar days, so the fallback is unreachable.
            due_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
            tags: strings(self.tags),
            created_at: now,
            updated_at: now,
            deleted_at: None,
            created_by: self.created_by.to_owned(),
        }
    }
}
