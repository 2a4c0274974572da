use serde_json::{Value, json};

/// JSON for one remote user record, shaped like the upstream API response.
pub fn remote_user(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "phone": format!("1-770-736-80{id:02}"),
    })
}

/// The canonical ten-record remote data set used across tests.
pub fn remote_users() -> Vec<Value> {
    [
        "Leanne Graham",
        "Ervin Howell",
        "Clementine Bauch",
        "Patricia Lebsack",
        "Chelsey Dietrich",
        "Dennis Schulist",
        "Kurtis Weissnat",
        "Nicholas Runolfsdottir V",
        "Glenna Reichert",
        "Clementina DuBuque",
    ]
    .iter()
    .enumerate()
    .map(|(i, name)| remote_user(i as i64 + 1, name))
    .collect()
}
