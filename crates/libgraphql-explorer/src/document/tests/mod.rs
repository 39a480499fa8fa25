mod document_tests;
mod parse_tests;
mod parsed_document_cache_tests;
mod round_trip_tests;
