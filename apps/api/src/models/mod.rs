pub mod grade;
pub mod question;
