mod home;
pub use home::Home;

mod compare;
pub use compare::Compare;

mod gallery;
pub use gallery::Gallery;

mod survey;
pub use survey::Survey;

mod admin;
pub use admin::Admin;
