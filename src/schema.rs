diesel::table! {
    note (id) {
        id -> Int4,
        name -> Varchar,
        description -> Varchar,
    }
}
