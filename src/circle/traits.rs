//! Common traits for CircleCI resources

/// Common trait for named API resources (contexts, environment variables)
pub trait CircleResource {
    /// Human-readable resource kind, used in error messages
    const KIND: &'static str;

    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestResource {
        id: String,
        name: String,
    }

    impl CircleResource for TestResource {
        const KIND: &'static str = "test resource";

        fn id(&self) -> &str {
            &self.id
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    #[test]
    fn test_resource_accessors() {
        let res = TestResource {
            id: "res-123".to_string(),
            name: "my-resource".to_string(),
        };
        assert_eq!(res.id(), "res-123");
        assert_eq!(res.name(), "my-resource");
        assert_eq!(TestResource::KIND, "test resource");
    }
}
