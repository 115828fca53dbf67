//! Default domain providers.
//!
//! Each submodule covers one domain facet. Every provider has the
//! [`Provider`](crate::registry::Provider) signature and draws all of its
//! randomness from the generator's RNG.

pub mod address;
pub mod datetime;
pub mod identifier;
pub mod internet;
pub mod lorem;
pub mod payment;
pub mod person;
pub mod phone;
pub mod price;

use crate::registry::Provider;
use std::sync::Arc;

/// Default tag names.
pub mod tags {
    pub const EMAIL: &str = "email";
    pub const MAC_ADDRESS: &str = "mac_address";
    pub const DOMAIN_NAME: &str = "domain_name";
    pub const URL: &str = "url";
    pub const USERNAME: &str = "username";
    pub const IPV4: &str = "ipv4";
    pub const IPV6: &str = "ipv6";
    pub const PASSWORD: &str = "password";

    pub const CC_TYPE: &str = "cc_type";
    pub const CC_NUMBER: &str = "cc_number";

    pub const LATITUDE: &str = "lat";
    pub const LONGITUDE: &str = "long";

    pub const PHONE_NUMBER: &str = "phone_number";
    pub const TOLL_FREE_NUMBER: &str = "toll_free_number";
    pub const E164_PHONE_NUMBER: &str = "e_164_phone_number";

    pub const TITLE_MALE: &str = "title_male";
    pub const TITLE_FEMALE: &str = "title_female";
    pub const FIRST_NAME: &str = "first_name";
    pub const FIRST_NAME_MALE: &str = "first_name_male";
    pub const FIRST_NAME_FEMALE: &str = "first_name_female";
    pub const LAST_NAME: &str = "last_name";
    pub const NAME: &str = "name";

    pub const UNIX_TIME: &str = "unix_time";
    pub const DATE: &str = "date";
    pub const TIME: &str = "time";
    pub const MONTH_NAME: &str = "month_name";
    pub const YEAR: &str = "year";
    pub const DAY_OF_WEEK: &str = "day_of_week";
    pub const DAY_OF_MONTH: &str = "day_of_month";
    pub const TIMESTAMP: &str = "timestamp";
    pub const CENTURY: &str = "century";
    pub const TIMEZONE: &str = "timezone";
    pub const TIME_PERIOD: &str = "time_period";

    pub const WORD: &str = "word";
    pub const SENTENCE: &str = "sentence";
    pub const PARAGRAPH: &str = "paragraph";

    pub const CURRENCY: &str = "currency";
    pub const AMOUNT: &str = "amount";
    pub const AMOUNT_WITH_CURRENCY: &str = "amount_with_currency";

    pub const UUID_DIGIT: &str = "uuid_digit";
    pub const UUID_HYPHENATED: &str = "uuid_hyphenated";

    /// Every default tag name.
    pub const DEFAULT_TAGS: &[&str] = &[
        EMAIL,
        MAC_ADDRESS,
        DOMAIN_NAME,
        URL,
        USERNAME,
        IPV4,
        IPV6,
        PASSWORD,
        CC_TYPE,
        CC_NUMBER,
        LATITUDE,
        LONGITUDE,
        PHONE_NUMBER,
        TOLL_FREE_NUMBER,
        E164_PHONE_NUMBER,
        TITLE_MALE,
        TITLE_FEMALE,
        FIRST_NAME,
        FIRST_NAME_MALE,
        FIRST_NAME_FEMALE,
        LAST_NAME,
        NAME,
        UNIX_TIME,
        DATE,
        TIME,
        MONTH_NAME,
        YEAR,
        DAY_OF_WEEK,
        DAY_OF_MONTH,
        TIMESTAMP,
        CENTURY,
        TIMEZONE,
        TIME_PERIOD,
        WORD,
        SENTENCE,
        PARAGRAPH,
        CURRENCY,
        AMOUNT,
        AMOUNT_WITH_CURRENCY,
        UUID_DIGIT,
        UUID_HYPHENATED,
    ];
}

/// The default `(tag, provider)` pairs a new registry is seeded with.
pub fn defaults() -> Vec<(&'static str, Arc<dyn Provider>)> {
    vec![
        (tags::EMAIL, Arc::new(internet::email)),
        (tags::MAC_ADDRESS, Arc::new(internet::mac_address)),
        (tags::DOMAIN_NAME, Arc::new(internet::domain_name)),
        (tags::URL, Arc::new(internet::url)),
        (tags::USERNAME, Arc::new(internet::username)),
        (tags::IPV4, Arc::new(internet::ipv4)),
        (tags::IPV6, Arc::new(internet::ipv6)),
        (tags::PASSWORD, Arc::new(internet::password)),
        (tags::CC_TYPE, Arc::new(payment::cc_type)),
        (tags::CC_NUMBER, Arc::new(payment::cc_number)),
        (tags::LATITUDE, Arc::new(address::latitude)),
        (tags::LONGITUDE, Arc::new(address::longitude)),
        (tags::PHONE_NUMBER, Arc::new(phone::phone_number)),
        (tags::TOLL_FREE_NUMBER, Arc::new(phone::toll_free_number)),
        (tags::E164_PHONE_NUMBER, Arc::new(phone::e164_phone_number)),
        (tags::TITLE_MALE, Arc::new(person::title_male)),
        (tags::TITLE_FEMALE, Arc::new(person::title_female)),
        (tags::FIRST_NAME, Arc::new(person::first_name)),
        (tags::FIRST_NAME_MALE, Arc::new(person::first_name_male)),
        (tags::FIRST_NAME_FEMALE, Arc::new(person::first_name_female)),
        (tags::LAST_NAME, Arc::new(person::last_name)),
        (tags::NAME, Arc::new(person::name)),
        (tags::UNIX_TIME, Arc::new(datetime::unix_time)),
        (tags::DATE, Arc::new(datetime::date)),
        (tags::TIME, Arc::new(datetime::time)),
        (tags::MONTH_NAME, Arc::new(datetime::month_name)),
        (tags::YEAR, Arc::new(datetime::year)),
        (tags::DAY_OF_WEEK, Arc::new(datetime::day_of_week)),
        (tags::DAY_OF_MONTH, Arc::new(datetime::day_of_month)),
        (tags::TIMESTAMP, Arc::new(datetime::timestamp)),
        (tags::CENTURY, Arc::new(datetime::century)),
        (tags::TIMEZONE, Arc::new(datetime::timezone)),
        (tags::TIME_PERIOD, Arc::new(datetime::time_period)),
        (tags::WORD, Arc::new(lorem::word)),
        (tags::SENTENCE, Arc::new(lorem::sentence)),
        (tags::PARAGRAPH, Arc::new(lorem::paragraph)),
        (tags::CURRENCY, Arc::new(price::currency)),
        (tags::AMOUNT, Arc::new(price::amount)),
        (tags::AMOUNT_WITH_CURRENCY, Arc::new(price::amount_with_currency)),
        (tags::UUID_DIGIT, Arc::new(identifier::digit)),
        (tags::UUID_HYPHENATED, Arc::new(identifier::hyphenated)),
    ]
}
