//! Trimming and coded-value standardization
//!
//! Every mapping here is total: null, blank, unknown, and malformed inputs
//! all map to a defined label, usually `n/a`.

use std::fmt;

/// Label used for any value that does not map to a known code
pub const NOT_AVAILABLE: &str = "n/a";

/// Trimmed, uppercased comparison key; null becomes the empty string
fn code_of(raw: Option<&str>) -> String {
    raw.map(|v| v.trim().to_uppercase()).unwrap_or_default()
}

/// Trim surrounding whitespace, keeping null as null
pub fn trim_text(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string())
}

/// Customer marital status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaritalStatus {
    Single,
    Married,
    Unknown,
}

impl MaritalStatus {
    /// `S` → Single, `M` → Married, anything else → n/a
    pub fn from_code(raw: Option<&str>) -> Self {
        match code_of(raw).as_str() {
            "S" => MaritalStatus::Single,
            "M" => MaritalStatus::Married,
            _ => MaritalStatus::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Unknown => NOT_AVAILABLE,
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Gender, shared label set for the CRM and ERP sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Unknown,
}

impl Gender {
    /// CRM codes: single letters only (`F`, `M`)
    pub fn from_crm_code(raw: Option<&str>) -> Self {
        match code_of(raw).as_str() {
            "F" => Gender::Female,
            "M" => Gender::Male,
            _ => Gender::Unknown,
        }
    }

    /// ERP codes: single letters or full words (`F`/`FEMALE`, `M`/`MALE`)
    pub fn from_erp_code(raw: Option<&str>) -> Self {
        match code_of(raw).as_str() {
            "F" | "FEMALE" => Gender::Female,
            "M" | "MALE" => Gender::Male,
            _ => Gender::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Unknown => NOT_AVAILABLE,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Product line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductLine {
    Mountain,
    Road,
    Touring,
    OtherSales,
    Unknown,
}

impl ProductLine {
    pub fn from_code(raw: Option<&str>) -> Self {
        match code_of(raw).as_str() {
            "M" => ProductLine::Mountain,
            "R" => ProductLine::Road,
            "T" => ProductLine::Touring,
            "S" => ProductLine::OtherSales,
            _ => ProductLine::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProductLine::Mountain => "Mountain",
            ProductLine::Road => "Road",
            ProductLine::Touring => "Touring",
            ProductLine::OtherSales => "Other sales",
            ProductLine::Unknown => NOT_AVAILABLE,
        }
    }
}

impl fmt::Display for ProductLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Country code to full name.
///
/// `DE` → Germany, `US`/`USA` → United States, blank or null → n/a.
/// Anything else passes through trimmed, with its original casing.
pub fn normalize_country(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or("");
    let label = match trimmed.to_uppercase().as_str() {
        "DE" => "Germany",
        "US" | "USA" => "United States",
        "" => NOT_AVAILABLE,
        _ => trimmed,
    };
    label.to_string()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
