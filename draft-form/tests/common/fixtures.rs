//! Test fixtures and data for draft form tests

use draft_form::DraftSession;
use shared::ContactRecord;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const PLACEHOLDER: &'static str = "\u{2014}";

    /// Three catalog rows (65.00, 2400.00, 20.00 when checked) and a
    /// 50/h blank row with a 10.00 base fee
    pub fn session_json() -> &'static str {
        r#"{
            "config": {"max_rows": 4},
            "catalog": [
                {"code": "dev", "name": "Development", "hourly_rate": "10", "base_fee": "5", "default_hours": "2", "default_quantity": "3"},
                {"code": "design", "name": "Design", "hourly_rate": "75", "base_fee": "0", "default_hours": "8", "default_quantity": "4"},
                {"code": "pm", "name": "Project management", "hourly_rate": "100", "base_fee": "20", "default_hours": "0", "default_quantity": "5"}
            ],
            "blank_row": {"hourly_rate": "50", "base_fee": "10", "hours": "1", "quantity": "1"}
        }"#
    }

    pub fn session() -> DraftSession {
        DraftSession::from_json(Self::session_json()).unwrap()
    }

    pub fn session_for_company(company: &str) -> DraftSession {
        let mut session = Self::session();
        session.company = company.to_string();
        session
    }

    pub fn acme() -> ContactRecord {
        ContactRecord::new(" Acme Inc ", "Ops@Acme.Example")
    }

    pub fn globex() -> ContactRecord {
        ContactRecord::new("Globex", "hello@globex.example")
    }
}
