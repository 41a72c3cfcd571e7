//! Survey form: Likert question groups, demographics and the submission flow.

mod demographics;
pub use demographics::{ChoiceField, CHOICE_FIELDS, OTHER_COUNTRY};

mod payload;
pub use payload::{build_response, PayloadError};

mod questions;
pub use questions::{render_questions, QuestionBlock, QuestionGroup, RatingOption};

mod view;
pub use view::{SubmitStatus, SurveyForm};
