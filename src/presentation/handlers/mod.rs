mod s3_event;

pub use s3_event::{
    IntakeResponse, SUCCESS_MESSAGE, batch_response, handle_event, object_locations,
    s3_event_handler,
};
