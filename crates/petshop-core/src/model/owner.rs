use petshop_core_types::Sensitive;

use super::ids::OwnerId;

/// Request-scoped snapshot of a pet owner
///
/// The owner's name is personal data; it is wrapped in [`Sensitive`] so that
/// it never shows up in `Debug` output or log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub id: OwnerId,
    pub name: Sensitive<String>,
}

impl Owner {
    pub fn new(id: OwnerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Sensitive::new(name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_debug_redacts_name() {
        let owner = Owner::new(OwnerId::new("o1"), "Jane Doe");
        let rendered = format!("{:?}", owner);

        assert!(rendered.contains("o1"));
        assert!(!rendered.contains("Jane Doe"));
        assert_eq!(owner.name.expose(), "Jane Doe");
    }
}
