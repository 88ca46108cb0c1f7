//! Landing screen after sign-in: pipeline stat cards, recent activity, and
//! shortcuts into the rest of the console.

use super::client::{ClientRecord, ClientStatus};

/// Status filter a stat card applies when it opens the client list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryPreset {
    AllClients,
    NewLeads,
    PendingAssessments,
    CompletedReports,
    FollowUpsDue,
}

impl DirectoryPreset {
    /// Statuses selected by the preset; empty means no status filter.
    pub fn statuses(self) -> &'static [ClientStatus] {
        match self {
            Self::AllClients => &[],
            Self::NewLeads => &[ClientStatus::NewLead],
            Self::PendingAssessments => &[ClientStatus::AssessmentSent],
            Self::CompletedReports => &[
                ClientStatus::ReportReady,
                ClientStatus::FollowUpNeeded,
                ClientStatus::ApplicationStarted,
            ],
            Self::FollowUpsDue => &[ClientStatus::FollowUpNeeded],
        }
    }

    pub fn count(self, clients: &[ClientRecord]) -> usize {
        let statuses = self.statuses();
        clients
            .iter()
            .filter(|client| statuses.is_empty() || statuses.contains(&client.status))
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub description: &'static str,
    /// Month-over-month movement reported by the sales team.
    pub trend: &'static str,
    pub preset: DirectoryPreset,
}

pub static STAT_CARDS: [StatCard; 5] = [
    StatCard {
        label: "Total Clients",
        description: "Active clients in your portfolio",
        trend: "+12%",
        preset: DirectoryPreset::AllClients,
    },
    StatCard {
        label: "New Leads",
        description: "Clients awaiting assessment form sent to them",
        trend: "+8%",
        preset: DirectoryPreset::NewLeads,
    },
    StatCard {
        label: "Pending Assessments",
        description: "Clients awaiting assessment completion",
        trend: "+5%",
        preset: DirectoryPreset::PendingAssessments,
    },
    StatCard {
        label: "Completed Reports",
        description: "Reports generated this month",
        trend: "+23%",
        preset: DirectoryPreset::CompletedReports,
    },
    StatCard {
        label: "Follow-ups Due",
        description: "Clients requiring follow-up contact",
        trend: "-8%",
        preset: DirectoryPreset::FollowUpsDue,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
}

pub static RECENT_ACTIVITY: [Activity; 4] = [
    Activity {
        title: "Assessment sent to Sarah Johnson",
        description: "Life insurance needs assessment form delivered",
        time: "2 hours ago",
    },
    Activity {
        title: "Report generated for Mike Chen",
        description: "Comprehensive life insurance analysis completed",
        time: "4 hours ago",
    },
    Activity {
        title: "Client viewed report",
        description: "John Smith reviewed his protection score report",
        time: "6 hours ago",
    },
    Activity {
        title: "New client added",
        description: "Emily Davis added to your client portfolio",
        time: "1 day ago",
    },
];

/// Where a dashboard shortcut leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutTarget {
    Directory(DirectoryPreset),
    Communication,
    /// Listed on the dashboard but not available yet.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub title: &'static str,
    pub description: &'static str,
    pub target: ShortcutTarget,
}

pub static SHORTCUTS: [Shortcut; 4] = [
    Shortcut {
        title: "View Reports",
        description: "Review generated client reports",
        target: ShortcutTarget::Directory(DirectoryPreset::CompletedReports),
    },
    Shortcut {
        title: "Review Sales Scripts",
        description: "Review and update sales conversation scripts",
        target: ShortcutTarget::Unavailable,
    },
    Shortcut {
        title: "Add Client",
        description: "Add new client to your portfolio",
        target: ShortcutTarget::Directory(DirectoryPreset::AllClients),
    },
    Shortcut {
        title: "Create Communication Templates",
        description: "Create email and message templates for clients",
        target: ShortcutTarget::Communication,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardFocus {
    #[default]
    Stats,
    Shortcuts,
}

/// Cursor over the stat cards and the shortcut list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardState {
    focus: DashboardFocus,
    selected_stat: usize,
    selected_shortcut: usize,
}

impl DashboardState {
    pub fn focus(&self) -> DashboardFocus {
        self.focus
    }

    pub fn selected_stat(&self) -> usize {
        self.selected_stat
    }

    pub fn selected_shortcut(&self) -> usize {
        self.selected_shortcut
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            DashboardFocus::Stats => DashboardFocus::Shortcuts,
            DashboardFocus::Shortcuts => DashboardFocus::Stats,
        };
    }

    pub fn select_next(&mut self) {
        match self.focus {
            DashboardFocus::Stats => {
                self.selected_stat = (self.selected_stat + 1).min(STAT_CARDS.len() - 1);
            }
            DashboardFocus::Shortcuts => {
                self.selected_shortcut = (self.selected_shortcut + 1).min(SHORTCUTS.len() - 1);
            }
        }
    }

    pub fn select_previous(&mut self) {
        match self.focus {
            DashboardFocus::Stats => self.selected_stat = self.selected_stat.saturating_sub(1),
            DashboardFocus::Shortcuts => {
                self.selected_shortcut = self.selected_shortcut.saturating_sub(1);
            }
        }
    }

    /// Destination of the highlighted card or shortcut.
    pub fn activate(&self) -> ShortcutTarget {
        match self.focus {
            DashboardFocus::Stats => STAT_CARDS
                .get(self.selected_stat)
                .map_or(ShortcutTarget::Unavailable, |card| {
                    ShortcutTarget::Directory(card.preset)
                }),
            DashboardFocus::Shortcuts => SHORTCUTS
                .get(self.selected_shortcut)
                .map_or(ShortcutTarget::Unavailable, |shortcut| shortcut.target),
        }
    }
}
