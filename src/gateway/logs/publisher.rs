use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes each domain event as one structured log record.
#[derive(Debug)]
pub struct LogPublisher {
    branch_id: String,
}

impl LogPublisher {
    pub(crate) fn new(branch_id: &str) -> Self {
        Self {
            branch_id: branch_id.to_string(),
        }
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!(branch_id = %self.branch_id, event_id = %event.event_id, name = %event.name,
            key = %event.key, kind = ?event.kind, event = %json, "published domain event");
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[test]
    fn test_should_publish_to_logs() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::added("test-name", "key", &HashMap::from([("k".to_string(), "v".to_string())]), &data).expect("build event");
        let publisher = LogPublisher::new("test");
        let _ = publisher.publish(&event).expect("should publish");
    }

    #[test]
    fn test_should_create_publisher() {
        let publisher = create_publisher("test");
        let event = DomainEvent::deleted("books", "key", &HashMap::new(), &"id").expect("build event");
        assert!(publisher.publish(&event).is_ok());
    }
}
