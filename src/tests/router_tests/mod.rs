mod api_tests;
mod download_tests;
mod page_tests;
