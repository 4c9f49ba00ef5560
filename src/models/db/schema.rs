diesel::table! {
    categories (id) {
        id -> Int4,
        #[sql_name = "type"]
        kind -> Text,
    }
}

diesel::table! {
    questions (id) {
        id -> Int4,
        question -> Text,
        answer -> Text,
        category -> Int4,
        difficulty -> Int4,
    }
}

diesel::joinable!(questions -> categories (category));

diesel::allow_tables_to_appear_in_same_query!(
    categories,
    questions,
);
