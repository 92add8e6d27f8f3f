pub mod questionnaire_form;
pub mod resignation_form;
