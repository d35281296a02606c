// Document formatting: resume layouts, the cover letter, and shared casing rules.

pub mod cover_letter;
pub mod resume;
pub mod text_case;
