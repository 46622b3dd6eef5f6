use uuid::Uuid;

/// 生成新的对象键（UUID v4，小写连字符格式）。
///
/// 不检查存储中是否已存在同名对象，依赖 UUID 的碰撞概率保证唯一。
///
/// # 示例
///
/// ```
/// use stamp_writer::utils::key::new_object_key;
///
/// let key = new_object_key();
/// assert_eq!(key.len(), 36);
/// assert!(uuid::Uuid::parse_str(&key).is_ok());
/// ```
pub fn new_object_key() -> String {
    Uuid::new_v4().to_string()
}
