use serde_json::Value;

use crate::errors::{ClassroomError, Result};

/// 将 JSON 值解释为正整数 ID
///
/// 整数值的浮点数（如 `5.0`）视为对应的整数，字符串不是整数。
pub fn as_valid_id(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };

    let id = match number.as_i64() {
        Some(id) => id,
        None => {
            let float = number.as_f64()?;
            if float.fract() != 0.0 || float < 1.0 || float >= i64::MAX as f64 {
                return None;
            }
            float as i64
        }
    };

    (id > 0).then_some(id)
}

/// 过滤出合法的 ID，保持顺序并去重
pub fn filter_valid_ids(values: &[Value]) -> Vec<i64> {
    let mut ids: Vec<i64> = Vec::with_capacity(values.len());
    for id in values.iter().filter_map(as_valid_id) {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// 校验单个 ID 为正整数
pub fn ensure_valid_id(id: i64, field: &str) -> Result<i64> {
    if id > 0 {
        Ok(id)
    } else {
        Err(ClassroomError::validation(format!(
            "Invalid {field}: {id} must be a positive integer"
        )))
    }
}

/// 必填的 ID 数组
pub fn require_id_array(values: Option<Vec<Value>>, field: &str) -> Result<Vec<Value>> {
    match values {
        None => Err(ClassroomError::validation(format!("{field} must be an array"))),
        Some(values) if values.is_empty() => Err(ClassroomError::validation(format!(
            "{field} must not be empty"
        ))),
        Some(values) => Ok(values),
    }
}

/// 分数不能为负
pub fn ensure_non_negative(points: i64, field: &str) -> Result<i64> {
    if points >= 0 {
        Ok(points)
    } else {
        Err(ClassroomError::validation(format!(
            "Invalid {field}: {points} must not be negative"
        )))
    }
}

pub fn validate_name(name: &str) -> std::result::Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name must not be empty");
    }
    if name.chars().count() > 255 {
        return Err("Name must be at most 255 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_valid_id() {
        assert_eq!(as_valid_id(&json!(5)), Some(5));
        assert_eq!(as_valid_id(&json!(5.0)), Some(5));
        assert_eq!(as_valid_id(&json!(5.5)), None);
        assert_eq!(as_valid_id(&json!(0)), None);
        assert_eq!(as_valid_id(&json!(-1)), None);
        assert_eq!(as_valid_id(&json!("5")), None);
        assert_eq!(as_valid_id(&json!(null)), None);
        assert_eq!(as_valid_id(&json!(u64::MAX)), None);
    }

    #[test]
    fn test_filter_valid_ids_skips_malformed_and_duplicates() {
        let values = vec![json!(5), json!("x"), json!(-1), json!(5)];
        assert_eq!(filter_valid_ids(&values), vec![5]);

        let values = vec![json!(3), json!(2.0), json!({"id": 4}), json!(3)];
        assert_eq!(filter_valid_ids(&values), vec![3, 2]);
    }

    #[test]
    fn test_ensure_valid_id() {
        assert_eq!(ensure_valid_id(3, "classroom id").unwrap(), 3);
        let err = ensure_valid_id(0, "classroom id").unwrap_err();
        assert_eq!(err.kind(), crate::errors::ErrorKind::Validation);
    }

    #[test]
    fn test_require_id_array() {
        assert!(require_id_array(None, "students_id").is_err());
        assert!(require_id_array(Some(vec![]), "students_id").is_err());
        // 非空但全部不合法的数组交给调用方过滤
        assert_eq!(
            require_id_array(Some(vec![json!("x")]), "students_id").unwrap(),
            vec![json!("x")]
        );
        assert_eq!(
            require_id_array(Some(vec![json!(1)]), "students_id").unwrap(),
            vec![json!(1)]
        );
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Math 101").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"a".repeat(256)).is_err());
    }
}
