use crate::controllers::interactive::events::field_event::FieldEvent;

pub trait FieldSink: Send + Sync {
    fn submit(&self, event: FieldEvent);
}
