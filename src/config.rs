/// Configuration for conversion behavior
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub name_column: String,
    pub start_column: String,
    pub buffer_size: usize,
    pub max_line_length: usize,
    pub debug: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            name_column: "Name".to_string(),
            start_column: "Start".to_string(),
            buffer_size: 65536,       // 64KB
            max_line_length: 1048576, // 1MB
            debug: false,
        }
    }
}
