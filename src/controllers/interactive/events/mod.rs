pub mod field_event;
