use super::*;

#[test]
fn recognize_accepts_and_rejects() {
    assert_eq!(recognize("id + id * id #"), Ok(true));
    assert_eq!(recognize("id +++ id #"), Ok(false));
    assert_eq!(recognize(")"), Ok(false));
}
