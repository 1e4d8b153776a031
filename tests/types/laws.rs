use rail_result::Outcome;

fn half(x: i32) -> Outcome<i32, String> {
    if x % 2 == 0 {
        Outcome::ok(x / 2)
    } else {
        Outcome::err(format!("{x} is odd"))
    }
}

fn below_ten(x: i32) -> Outcome<i32, String> {
    if x < 10 {
        Outcome::ok(x)
    } else {
        Outcome::err(format!("{x} is too large"))
    }
}

fn samples() -> Vec<Outcome<i32, String>> {
    vec![
        Outcome::ok(40),
        Outcome::ok(12),
        Outcome::ok(7),
        Outcome::ok(0),
        Outcome::err("upstream".to_string()),
    ]
}

#[test]
fn map_identity_is_identity() {
    for r in samples() {
        assert_eq!(r.clone().map(|x| x), r);
    }
}

#[test]
fn map_composes() {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 3;
    for r in samples() {
        assert_eq!(r.clone().map(f).map(g), r.map(|x| g(f(x))));
    }
}

#[test]
fn and_then_left_identity() {
    for v in [40, 12, 7, 0] {
        assert_eq!(Outcome::<i32, String>::ok(v).and_then(half), half(v));
    }
}

#[test]
fn and_then_right_identity() {
    for r in samples() {
        assert_eq!(r.clone().and_then(Outcome::ok), r);
    }
}

#[test]
fn and_then_is_associative() {
    for r in samples() {
        let left = r.clone().and_then(half).and_then(below_ten);
        let right = r.and_then(|x| half(x).and_then(below_ten));
        assert_eq!(left, right);
    }
}

#[test]
fn ok_map_equals_ok_of_applied_function() {
    let f = |x: i32| x.pow(2);
    assert_eq!(Outcome::<i32, ()>::ok(9).map(f), Outcome::ok(f(9)));
    assert_eq!(Outcome::<i32, String>::ok(9).map(f), Outcome::ok(81));
}
