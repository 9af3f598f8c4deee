use std::io::ErrorKind;
use std::path::Path;

use crate::error::InputError;

/// Reviewed when no file is given
pub const SAMPLE_CODE: &str = r#"
def process_user_input(user_input):
    # New function to process user data
    result = eval(user_input)  # Potential security issue
    return result

def calculate_total(items):
    total = 0
    for i in range(len(items)):  # Performance issue - inefficient loop
        total += items[i]
    return total

class DataProcessor:
    def process_data_with_long_function_name_that_does_too_many_things(self, data1, data2, data3, data4, data5, data6):
        # This function has too many parameters
        if data1:
            if data2:
                if data3:
                    if data4:
                        if data5:
                            # Deep nesting issue
                            return data1 + data2 + data3 + data4 + data5
        return 0
"#;

pub fn read_code(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_code_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fn main() {{}}").unwrap();

        assert_eq!(read_code(file.path()).unwrap(), "fn main() {}\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.rs");

        match read_code(&path) {
            Err(InputError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_read_non_utf8_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            read_code(file.path()),
            Err(InputError::Read { .. })
        ));
    }

    #[test]
    fn test_sample_code_is_not_empty() {
        assert!(SAMPLE_CODE.contains("def process_user_input"));
    }
}
