//! Diesel schema for the application tables.

diesel::table! {
    /// Task categories.
    categories (id) {
        /// Row identifier.
        id -> Integer,
        /// Unique category name.
        name -> Text,
    }
}

diesel::table! {
    /// Live to-do items.
    tasks (id) {
        /// Row identifier.
        id -> Integer,
        /// To-do name.
        name -> Text,
        /// Owning category, if any.
        category_id -> Nullable<Integer>,
        /// Due date.
        due_date -> Date,
        /// Reserved owner link; never written.
        owner_id -> Nullable<Integer>,
    }
}

diesel::table! {
    /// Archive of completed to-dos.
    done_records (id) {
        /// Row identifier.
        id -> Integer,
        /// Name of the completed to-do.
        name -> Text,
        /// Category name captured at completion time.
        category_name -> Nullable<Text>,
        /// Completion date.
        completed_on -> Date,
    }
}

diesel::table! {
    /// Registered accounts.
    accounts (id) {
        /// Row identifier.
        id -> Integer,
        /// Unique login email.
        email -> Text,
        /// Argon2 PHC string.
        password_hash -> Text,
        /// Name shown to the user.
        display_name -> Text,
    }
}

diesel::joinable!(tasks -> categories (category_id));

diesel::allow_tables_to_appear_in_same_query!(accounts, categories, done_records, tasks);
