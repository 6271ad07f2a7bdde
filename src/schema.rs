table! {
    articles (id) {
        id -> Integer,
        title -> Text,
        content -> Text,
        author_name -> Text,
        image_url -> Nullable<Text>,
        created_at -> Timestamp,
        approved -> Bool,
    }
}

table! {
    suggested_articles (id) {
        id -> Integer,
        title -> Text,
        content -> Text,
        author_name -> Text,
        image_url -> Nullable<Text>,
        suggested_at -> Timestamp,
    }
}

allow_tables_to_appear_in_same_query!(articles, suggested_articles,);
