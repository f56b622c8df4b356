pub const API_NAME: &str = "[Dealership API]";
