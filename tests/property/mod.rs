mod digit_properties;
mod engine_properties;
