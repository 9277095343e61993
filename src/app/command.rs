use crate::domain::models::TransformRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Transform(TransformRequest),
}
