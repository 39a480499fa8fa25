mod document_edits_tests;
mod variables_tests;
