//! Plugin registration data for the host

use super::ecoindex::ECOINDEX_AUDIT_ID;
use serde::Serialize;

/// Location of an audit implementation the host should load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditPath {
    pub path: String,
}

/// Reference from a category to one of its audits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRef {
    pub id: String,
    pub weight: u32,
}

/// Report category the plugin contributes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub title: String,
    pub description: String,
    pub audit_refs: Vec<AuditRef>,
}

/// Everything the host needs to register the plugin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginConfig {
    pub audits: Vec<AuditPath>,
    pub category: Category,
}

impl PluginConfig {
    /// Registration for the EcoIndex category with its single audit
    pub fn ecoindex() -> Self {
        Self {
            audits: vec![AuditPath {
                path: format!("ecoindex/audits/{ECOINDEX_AUDIT_ID}"),
            }],
            category: Category {
                title: "EcoIndex".to_string(),
                description: "The environment impact of the web page according to ecoindex.fr"
                    .to_string(),
                audit_refs: vec![AuditRef {
                    id: ECOINDEX_AUDIT_ID.to_string(),
                    weight: 1,
                }],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecoindex_registration() {
        let plugin = PluginConfig::ecoindex();
        assert_eq!(plugin.audits.len(), 1);
        assert_eq!(plugin.category.title, "EcoIndex");
        assert_eq!(
            plugin.category.audit_refs,
            vec![AuditRef {
                id: "ecoindex".into(),
                weight: 1
            }]
        );
    }

    #[test]
    fn test_registration_json_shape() {
        let value = serde_json::to_value(PluginConfig::ecoindex()).expect("serialize plugin");
        assert_eq!(value["category"]["auditRefs"][0]["id"], "ecoindex");
        assert_eq!(value["category"]["auditRefs"][0]["weight"], 1);
        assert!(value["audits"][0]["path"]
            .as_str()
            .is_some_and(|p| p.ends_with("ecoindex")));
    }
}
