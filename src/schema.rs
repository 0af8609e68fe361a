diesel::table! {
    appointments (id) {
        id -> Uuid,
        booking_number -> Int4,
        barber_name -> Varchar,
        customer_name -> Varchar,
        customer_phone -> Varchar,
        customer_email -> Nullable<Varchar>,
        service -> Varchar,
        date -> Varchar,
        time -> Varchar,
        status -> Varchar,
        price -> Nullable<Varchar>,
        duration -> Nullable<Int4>,
        notes -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    gallery (id) {
        id -> Uuid,
        image_url -> Text,
        title -> Nullable<Varchar>,
        description -> Nullable<Text>,
        display_order -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    unavailability (id) {
        id -> Uuid,
        barber_name -> Varchar,
        date -> Varchar,
        time_slots -> Array<Text>,
        is_full_day -> Bool,
        reason -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}
