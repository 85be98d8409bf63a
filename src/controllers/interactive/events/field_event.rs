use crate::controllers::interactive::data::frame_data::FrameData;

#[derive(Debug)]
pub enum FieldEvent {
    Progress { generation: u64, fraction: f64 },
    Frame(FrameData),
}
