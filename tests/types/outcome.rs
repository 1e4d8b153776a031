use rail_result::{err, ok, Outcome};

#[test]
fn ok_reports_success_track() {
    let o = Outcome::<i32, &str>::ok(5);
    assert!(o.is_ok());
    assert!(!o.is_err());
    assert_eq!(*o.as_ok(), 5);
}

#[test]
fn err_reports_failure_track() {
    let o = Outcome::<i32, &str>::err("down");
    assert!(o.is_err());
    assert!(!o.is_ok());
    assert_eq!(*o.as_err(), "down");
}

#[test]
fn free_constructors_match_associated_ones() {
    assert_eq!(ok::<_, ()>(3), Outcome::<i32, ()>::ok(3));
    assert_eq!(err::<(), _>("x"), Outcome::<(), &str>::err("x"));
}

#[test]
fn same_payload_type_stays_unambiguous() {
    let good: Outcome<String, String> = Outcome::ok("value".to_string());
    let bad: Outcome<String, String> = Outcome::err("value".to_string());

    assert!(good.is_ok());
    assert!(bad.is_err());
    assert_ne!(good, bad);
}

#[test]
#[should_panic(expected = "called `Outcome::as_ok()` on an `Err` value")]
fn as_ok_on_err_panics() {
    let o = Outcome::<i32, &str>::err("nope");
    let _ = o.as_ok();
}

#[test]
#[should_panic(expected = "called `Outcome::as_err()` on an `Ok` value")]
fn as_err_on_ok_panics() {
    let o = Outcome::<i32, &str>::ok(1);
    let _ = o.as_err();
}

#[test]
fn ok_ref_and_err_ref_do_not_panic() {
    let good = Outcome::<i32, &str>::ok(1);
    assert_eq!(good.ok_ref(), Some(&1));
    assert_eq!(good.err_ref(), None);

    let bad = Outcome::<i32, &str>::err("e");
    assert_eq!(bad.ok_ref(), None);
    assert_eq!(bad.err_ref(), Some(&"e"));
}

#[test]
fn fold_runs_only_the_active_handler() {
    let mut ok_calls = 0;
    let mut err_calls = 0;

    let label = Outcome::<u8, &str>::ok(4).fold(
        |n| {
            ok_calls += 1;
            n.to_string()
        },
        |e| {
            err_calls += 1;
            e.to_string()
        },
    );

    assert_eq!(label, "4");
    assert_eq!((ok_calls, err_calls), (1, 0));
}

#[test]
fn as_ref_borrows_without_consuming() {
    let o = Outcome::<Vec<i32>, String>::ok(vec![1, 2, 3]);
    let total: Outcome<i32, &String> = o.as_ref().map(|v| v.iter().sum());

    assert_eq!(total, Outcome::Ok(6));
    assert_eq!(o.unwrap().len(), 3);
}

#[test]
fn as_mut_edits_the_payload_in_place() {
    let mut o = Outcome::<Vec<i32>, ()>::ok(vec![1]);
    if let Outcome::Ok(v) = o.as_mut() {
        v.push(2);
    }
    assert_eq!(o, Outcome::Ok(vec![1, 2]));
}

#[test]
fn outcome_is_copy_when_payloads_are() {
    let a = Outcome::<i32, u8>::ok(1);
    let b = a;
    assert_eq!(a, b);
}
