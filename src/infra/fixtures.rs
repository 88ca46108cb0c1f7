//! Hardcoded demo directory standing in for a client-data service.

use crate::{
    domain::client::{ApplicationStatus, ClientRecord, ClientStatus, ReportStatus},
    usecases::client_directory::{ClientSource, ClientSourceError},
};

struct Row {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    score: u8,
    gap: u64,
    status: ClientStatus,
    last_contact: &'static str,
    report: ReportStatus,
    application: ApplicationStatus,
}

const ROWS: [Row; 7] = [
    Row {
        id: "1",
        name: "John Smith",
        email: "john.smith@email.com",
        phone: "+1 (555) 123-4567",
        score: 45,
        gap: 500_000,
        status: ClientStatus::AssessmentSent,
        last_contact: "Assessment form sent 9/21",
        report: ReportStatus::Pending,
        application: ApplicationStatus::NotStarted,
    },
    Row {
        id: "2",
        name: "Sarah Johnson",
        email: "sarah.johnson@email.com",
        phone: "+1 (555) 234-5678",
        score: 78,
        gap: 200_000,
        status: ClientStatus::ReportReady,
        last_contact: "Report generated 9/19",
        report: ReportStatus::Completed,
        application: ApplicationStatus::NotStarted,
    },
    Row {
        id: "3",
        name: "Mike Chen",
        email: "mike.chen@email.com",
        phone: "+1 (555) 345-6789",
        score: 92,
        gap: 0,
        status: ClientStatus::Protected,
        last_contact: "No insurance need identified 9/18",
        report: ReportStatus::Completed,
        application: ApplicationStatus::NotStarted,
    },
    Row {
        id: "4",
        name: "Emily Davis",
        email: "emily.davis@email.com",
        phone: "+1 (555) 456-7890",
        score: 23,
        gap: 750_000,
        status: ClientStatus::NewLead,
        last_contact: "Never contacted",
        report: ReportStatus::NotStarted,
        application: ApplicationStatus::NotStarted,
    },
    Row {
        id: "5",
        name: "Robert Wilson",
        email: "robert.wilson@email.com",
        phone: "+1 (555) 567-8901",
        score: 67,
        gap: 300_000,
        status: ClientStatus::FollowUpNeeded,
        last_contact: "Phone call 9/15",
        report: ReportStatus::Completed,
        application: ApplicationStatus::NotStarted,
    },
    Row {
        id: "6",
        name: "Lisa Anderson",
        email: "lisa.anderson@email.com",
        phone: "+1 (555) 678-9012",
        score: 15,
        gap: 900_000,
        status: ClientStatus::ApplicationStarted,
        last_contact: "Application started 9/20",
        report: ReportStatus::Completed,
        application: ApplicationStatus::InProgress,
    },
    Row {
        id: "7",
        name: "David Martinez",
        email: "david.martinez@email.com",
        phone: "+1 (555) 789-0123",
        score: 85,
        gap: 0,
        status: ClientStatus::Protected,
        last_contact: "No insurance need identified 9/22",
        report: ReportStatus::Completed,
        application: ApplicationStatus::NotStarted,
    },
];

pub fn demo_clients() -> Vec<ClientRecord> {
    ROWS.iter()
        .map(|row| ClientRecord {
            id: row.id.to_owned(),
            name: row.name.to_owned(),
            email: row.email.to_owned(),
            phone: row.phone.to_owned(),
            protection_score: row.score,
            coverage_gap: row.gap,
            status: row.status,
            last_contact: row.last_contact.to_owned(),
            report_status: row.report,
            application_status: row.application,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureClientSource;

impl ClientSource for FixtureClientSource {
    fn list_clients(&self) -> Result<Vec<ClientRecord>, ClientSourceError> {
        Ok(demo_clients())
    }
}
