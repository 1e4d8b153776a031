use rail_result::prelude::*;

#[derive(Debug)]
enum FruitError {
    Bruised,
    ConversionError,
}

struct Apple {
    name: String,
    bruised: bool,
}

struct Fruit {
    name: String,
}

#[derive(Debug)]
struct Orange {
    name: String,
}

fn create_apple(name: &str, bruised: bool) -> Outcome<Apple, FruitError> {
    Outcome::ok(Apple { name: name.to_string(), bruised })
}

fn to_fruit(apple: Apple) -> Outcome<Fruit, FruitError> {
    if apple.bruised {
        Outcome::err(FruitError::Bruised)
    } else {
        Outcome::ok(Fruit { name: apple.name })
    }
}

fn to_orange(fruit: Fruit) -> Outcome<Orange, FruitError> {
    if fruit.name.starts_with('o') {
        Outcome::ok(Orange { name: fruit.name })
    } else {
        Outcome::err(FruitError::ConversionError)
    }
}

fn port_from_env(raw: Option<&str>) -> Maybe<u16> {
    raw.and_then(|r| r.parse().ok()).into_outcome()
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Chaining on the success track
    println!("\n1. Apple -> Fruit -> Orange:");
    for (name, bruised) in [("orangey", false), ("gala", false), ("orangey", true)] {
        let orange = create_apple(name, bruised).and_then(to_fruit).and_then(to_orange);
        match orange {
            Outcome::Ok(o) => println!("{name}: got {}", o.name),
            Outcome::Err(e) => println!("{name}: stopped with {e:?}"),
        }
    }

    // 2. Absence without a reason
    println!("\n2. Maybe:");
    println!("port = {}", port_from_env(Some("8443")).unwrap_or(8080));
    println!("port = {}", port_from_env(None).unwrap_or(8080));

    // 3. Back to std for `?`
    println!("\n3. Interop:");
    let result: Result<Orange, FruitError> = create_apple("orchard", false)
        .and_then(to_fruit)
        .and_then(to_orange)
        .into_result();
    println!("{result:?}");
}
