pub mod answer;
pub mod diagnosis;
pub mod question;
pub mod symptom;
