use crate::api::{ResignationRequest, ResignationStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HrTab {
    #[default]
    Resignations,
    Responses,
}

impl HrTab {
    pub const ALL: [HrTab; 2] = [HrTab::Resignations, HrTab::Responses];

    pub fn label(&self) -> &'static str {
        match self {
            HrTab::Resignations => "Resignation Requests",
            HrTab::Responses => "Exit Responses",
        }
    }
}

pub fn status_badge_class(status: ResignationStatus) -> &'static str {
    match status {
        ResignationStatus::Pending => "bg-yellow-100 text-yellow-800",
        ResignationStatus::Approved => "bg-green-100 text-green-800",
        ResignationStatus::Rejected => "bg-red-100 text-red-800",
    }
}

/// Only pending requests may still be approved or rejected.
pub fn can_conclude(request: &ResignationRequest) -> bool {
    request.status.is_pending()
}

pub fn conclude_message(approved: bool) -> &'static str {
    if approved {
        "Resignation approved successfully"
    } else {
        "Resignation rejected successfully"
    }
}
