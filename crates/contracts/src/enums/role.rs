use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission class assigned to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    President,
    VicePresident,
    DepartmentHead,
    Employee,
    Contractor,
    GisOfficer,
}

impl Role {
    /// Stable code used by the login form and the catalog
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::President => "president",
            Role::VicePresident => "vice_president",
            Role::DepartmentHead => "department_head",
            Role::Employee => "employee",
            Role::Contractor => "contractor",
            Role::GisOfficer => "gis_officer",
        }
    }

    /// Arabic name shown in the role selector and the header
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "مدير النظام",
            Role::President => "رئيس الهيئة",
            Role::VicePresident => "نائب الرئيس",
            Role::DepartmentHead => "رئيس القسم",
            Role::Employee => "موظف",
            Role::Contractor => "مقاول",
            Role::GisOfficer => "مسؤول نظم المعلومات الجغرافية",
        }
    }

    /// All roles in selector order
    pub fn all() -> Vec<Role> {
        vec![
            Role::Admin,
            Role::President,
            Role::VicePresident,
            Role::DepartmentHead,
            Role::Employee,
            Role::Contractor,
            Role::GisOfficer,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(Role::Admin),
            "president" => Some(Role::President),
            "vice_president" => Some(Role::VicePresident),
            "department_head" => Some(Role::DepartmentHead),
            "employee" => Some(Role::Employee),
            "contractor" => Some(Role::Contractor),
            "gis_officer" => Some(Role::GisOfficer),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_resolve_back_to_roles() {
        for role in Role::all() {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Role::from_code(""), None);
        assert_eq!(Role::from_code("Admin"), None);
        assert_eq!(Role::from_code("guest"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Role::VicePresident).unwrap();
        assert_eq!(json, "\"vice_president\"");
        let back: Role = serde_json::from_str("\"gis_officer\"").unwrap();
        assert_eq!(back, Role::GisOfficer);
    }
}
