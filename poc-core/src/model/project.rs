use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Administrative details of the engagement: partner lead, client contact, schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub project_name: String,
    // Partner
    pub lead_engineer: String,
    pub lead_email: String,
    pub organization: String,
    // Client
    pub client_organization: String,
    pub client_contact_name: String,
    pub client_contact_role: String,
    pub client_contact_email: String,
    pub client_contact_phone: String,
    // Dates (YYYY-MM-DD, free text while the user is typing)
    pub start_date: String,
    pub target_date: String,
    #[serde(default)]
    pub goals: Goals,
}

impl ProjectInfo {
    /// Empty project whose start date is the session date.
    pub fn new(session_date: NaiveDate) -> Self {
        Self {
            project_name: String::new(),
            lead_engineer: String::new(),
            lead_email: String::new(),
            organization: String::new(),
            client_organization: String::new(),
            client_contact_name: String::new(),
            client_contact_role: String::new(),
            client_contact_email: String::new(),
            client_contact_phone: String::new(),
            start_date: session_date.format("%Y-%m-%d").to_string(),
            target_date: String::new(),
            goals: Goals::default(),
        }
    }

    /// Shallow-merge every `Some` field of `patch`.
    pub fn apply(&mut self, patch: ProjectPatch) {
        let ProjectPatch {
            project_name,
            lead_engineer,
            lead_email,
            organization,
            client_organization,
            client_contact_name,
            client_contact_role,
            client_contact_email,
            client_contact_phone,
            start_date,
            target_date,
            goals,
        } = patch;
        merge(&mut self.project_name, project_name);
        merge(&mut self.lead_engineer, lead_engineer);
        merge(&mut self.lead_email, lead_email);
        merge(&mut self.organization, organization);
        merge(&mut self.client_organization, client_organization);
        merge(&mut self.client_contact_name, client_contact_name);
        merge(&mut self.client_contact_role, client_contact_role);
        merge(&mut self.client_contact_email, client_contact_email);
        merge(&mut self.client_contact_phone, client_contact_phone);
        merge(&mut self.start_date, start_date);
        merge(&mut self.target_date, target_date);
        merge(&mut self.goals, goals);
    }
}

/// Partial update for [`ProjectInfo`]; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub project_name: Option<String>,
    pub lead_engineer: Option<String>,
    pub lead_email: Option<String>,
    pub organization: Option<String>,
    pub client_organization: Option<String>,
    pub client_contact_name: Option<String>,
    pub client_contact_role: Option<String>,
    pub client_contact_email: Option<String>,
    pub client_contact_phone: Option<String>,
    pub start_date: Option<String>,
    pub target_date: Option<String>,
    pub goals: Option<Goals>,
}

pub(crate) fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Selected goals: insertion order is kept and duplicates are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Goals(Vec<String>);

impl Goals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, goal: &str) -> bool {
        self.0.iter().any(|g| g == goal)
    }

    /// Returns false when the goal was already selected.
    pub fn insert(&mut self, goal: impl Into<String>) -> bool {
        let goal = goal.into();
        if self.contains(&goal) {
            return false;
        }
        self.0.push(goal);
        true
    }

    pub fn remove(&mut self, goal: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|g| g != goal);
        self.0.len() != before
    }

    /// Select the goal if absent, deselect it otherwise. Returns the new membership.
    pub fn toggle(&mut self, goal: &str) -> bool {
        if self.remove(goal) {
            false
        } else {
            self.0.push(goal.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Goals {
    fn from(values: Vec<String>) -> Self {
        let mut goals = Goals::new();
        for value in values {
            goals.insert(value);
        }
        goals
    }
}

impl From<Goals> for Vec<String> {
    fn from(goals: Goals) -> Self {
        goals.0
    }
}

impl<S: Into<String>> FromIterator<S> for Goals {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut goals = Goals::new();
        for goal in iter {
            goals.insert(goal);
        }
        goals
    }
}
