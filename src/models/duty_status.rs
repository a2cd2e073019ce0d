/// Derived per-user state. Never persisted: always recomputed from the
/// user's ledger slice (on duty iff entries outnumber exits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DutyStatus {
    OnDuty,
    OffDuty,
}

impl DutyStatus {
    pub fn is_on_duty(&self) -> bool {
        matches!(self, DutyStatus::OnDuty)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DutyStatus::OnDuty => "on duty",
            DutyStatus::OffDuty => "off duty",
        }
    }
}
