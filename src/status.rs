//! Status enums shared by campaign-scoped resources.
//!
//! All of them serialize as their canonical upper-case name; see
//! [`codec`](crate::codec) for the conversion rules.

use crate::codec::string_enum;

string_enum! {
    /// User-controlled state of an ad group.
    pub enum Status {
        Enabled = 1 => "ENABLED",
        Paused = 2 => "PAUSED",
        Valid = 3 => "VALID",
        Invalid = 4 => "INVALID",
    }
}

string_enum! {
    /// Whether the ad group is currently eligible to serve.
    pub enum ServingStatus {
        Running = 1 => "RUNNING",
        NotRunning = 2 => "NOT_RUNNING",
    }
}

string_enum! {
    /// Summary status shown in the campaign management UI.
    pub enum DisplayStatus {
        Running = 1 => "RUNNING",
        OnHold = 2 => "ON_HOLD",
        Paused = 3 => "PAUSED",
        Deleted = 4 => "DELETED",
    }
}

string_enum! {
    /// How the ad group is billed.
    pub enum PricingModel {
        /// Cost per tap.
        Cpc = 1 => "CPC",
        /// Cost per thousand impressions.
        Cpm = 2 => "CPM",
    }
}
