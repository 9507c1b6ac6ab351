mod input_tests;
mod palette_tests;
