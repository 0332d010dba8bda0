diesel::table! {
    images (id) {
        id -> BigInt,
        local_path -> Text,
        destination_ref -> Nullable<Text>,
    }
}
