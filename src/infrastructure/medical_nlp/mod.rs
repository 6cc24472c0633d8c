mod comprehend_medical_adapter;
mod mock_medical_nlp;

pub use comprehend_medical_adapter::ComprehendMedicalAdapter;
pub use mock_medical_nlp::MockMedicalNlp;
