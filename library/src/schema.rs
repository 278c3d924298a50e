table! {
    device_data (id) {
        id -> Integer,
        tds -> Double,
        ph -> Double,
        main_liquid -> Text,
        components -> Text,
        ph_level -> Text,
        water_level -> Text,
        timestamp -> Timestamp,
    }
}

table! {
    settings (id) {
        id -> Integer,
        max_tds -> Double,
        min_tds -> Double,
        max_ph -> Double,
        min_ph -> Double,
    }
}
