//! Service type tags and their payment categories.
//!
//! Care requests carry one or more [`ServiceType`] tags. Each tag belongs to
//! exactly one [`ServiceCategory`], and the category decides which payment
//! rule applies to a logged entry.

use serde::{Deserialize, Serialize};

/// The payment category a service type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    /// Short clinical visits billed with a flat per-entry commission.
    QuickService,
    /// Extended caregiving billed hourly, split by a commission fraction.
    PrivateCare,
    /// Equipment and supply orders; never part of payment math.
    MedicalSupply,
    /// Request kinds handled administratively (physiotherapy, doctor visits).
    Administrative,
}

/// A category tag attached to a care request.
///
/// # Example
///
/// ```
/// use care_payments::models::{ServiceCategory, ServiceType};
///
/// let tag: ServiceType = serde_json::from_str("\"blood_test\"").unwrap();
/// assert_eq!(tag.category(), ServiceCategory::QuickService);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// Blood sample collection.
    BloodTest,
    /// Intramuscular injection.
    Intramuscular,
    /// Intravenous therapy.
    Intravenous,
    /// Short patient-care visit.
    PatientCare,
    /// Hemodynamic / vital-signs check.
    #[serde(alias = "vital_signs")]
    Hemodynamic,
    /// Any other quick-service task.
    Other,
    /// Full-time private caregiving.
    FullTime,
    /// Part-time private caregiving.
    PartTime,
    /// Normal (non-psychiatric) private caregiving.
    Normal,
    /// Psychiatric private caregiving.
    Psychiatric,
    /// Medical equipment or supply order.
    MedicalEquipment,
    /// Physiotherapy request.
    Physiotherapy,
    /// Doctor home visit.
    DoctorVisit,
}

impl ServiceType {
    /// Every service type, in declaration order.
    pub const ALL: [ServiceType; 13] = [
        ServiceType::BloodTest,
        ServiceType::Intramuscular,
        ServiceType::Intravenous,
        ServiceType::PatientCare,
        ServiceType::Hemodynamic,
        ServiceType::Other,
        ServiceType::FullTime,
        ServiceType::PartTime,
        ServiceType::Normal,
        ServiceType::Psychiatric,
        ServiceType::MedicalEquipment,
        ServiceType::Physiotherapy,
        ServiceType::DoctorVisit,
    ];

    /// Returns the payment category of this tag.
    pub fn category(self) -> ServiceCategory {
        match self {
            ServiceType::BloodTest
            | ServiceType::Intramuscular
            | ServiceType::Intravenous
            | ServiceType::PatientCare
            | ServiceType::Hemodynamic
            | ServiceType::Other => ServiceCategory::QuickService,
            ServiceType::FullTime
            | ServiceType::PartTime
            | ServiceType::Normal
            | ServiceType::Psychiatric => ServiceCategory::PrivateCare,
            ServiceType::MedicalEquipment => ServiceCategory::MedicalSupply,
            ServiceType::Physiotherapy | ServiceType::DoctorVisit => {
                ServiceCategory::Administrative
            }
        }
    }

    /// Returns the snake_case tag used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceType::BloodTest => "blood_test",
            ServiceType::Intramuscular => "intramuscular",
            ServiceType::Intravenous => "intravenous",
            ServiceType::PatientCare => "patient_care",
            ServiceType::Hemodynamic => "hemodynamic",
            ServiceType::Other => "other",
            ServiceType::FullTime => "full_time",
            ServiceType::PartTime => "part_time",
            ServiceType::Normal => "normal",
            ServiceType::Psychiatric => "psychiatric",
            ServiceType::MedicalEquipment => "medical_equipment",
            ServiceType::Physiotherapy => "physiotherapy",
            ServiceType::DoctorVisit => "doctor_visit",
        }
    }
}

impl ServiceCategory {
    /// Returns the snake_case name used in audit output.
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceCategory::QuickService => "quick_service",
            ServiceCategory::PrivateCare => "private_care",
            ServiceCategory::MedicalSupply => "medical_supply",
            ServiceCategory::Administrative => "administrative",
        }
    }
}

/// Classifies an entry by its full set of tags.
///
/// Precedence is medical supply, then quick service, then private care, then
/// administrative. An empty tag set has no category.
///
/// # Example
///
/// ```
/// use care_payments::models::{classify_entry, ServiceCategory, ServiceType};
///
/// let tags = [ServiceType::FullTime, ServiceType::BloodTest];
/// assert_eq!(classify_entry(&tags), Some(ServiceCategory::QuickService));
/// assert_eq!(classify_entry(&[]), None);
/// ```
pub fn classify_entry(service_types: &[ServiceType]) -> Option<ServiceCategory> {
    let has = |category: ServiceCategory| service_types.iter().any(|t| t.category() == category);

    if has(ServiceCategory::MedicalSupply) {
        Some(ServiceCategory::MedicalSupply)
    } else if has(ServiceCategory::QuickService) {
        Some(ServiceCategory::QuickService)
    } else if has(ServiceCategory::PrivateCare) {
        Some(ServiceCategory::PrivateCare)
    } else if has(ServiceCategory::Administrative) {
        Some(ServiceCategory::Administrative)
    } else {
        None
    }
}
