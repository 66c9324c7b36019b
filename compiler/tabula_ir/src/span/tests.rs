use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(Span::new(7, 7).is_empty());
}

#[test]
fn test_from_range_saturating() {
    let too_big = u32::MAX as usize + 10;
    assert_eq!(
        Span::from_range_saturating(3..too_big),
        Span::new(3, u32::MAX)
    );
}

#[test]
fn test_span_display() {
    assert_eq!(Span::new(2, 5).to_string(), "2..5");
}

#[test]
fn test_position_display_and_default() {
    assert_eq!(Position::new(3, 14).to_string(), "3:14");
    assert_eq!(Position::default(), Position::START);
}
