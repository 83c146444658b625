pub(super) static NATIONALITIES: &[&str] = &[
    "Argentinian", "Australian", "Austrian", "Belgian", "Brazilian", "British",
    "Canadian", "Chilean", "Chinese", "Colombian", "Croatian", "Czech", "Danish",
    "Dutch", "Egyptian", "Ethiopian", "Filipino", "Finnish", "French", "German",
    "Greek", "Hungarian", "Icelandic", "Indian", "Indonesian", "Irish", "Israeli",
    "Italian", "Japanese", "Kenyan", "Korean", "Malaysian", "Mexican",
    "Moroccan", "New Zealander", "Nigerian", "Norwegian", "Peruvian", "Polish",
    "Portuguese", "Russian", "Singaporean", "South African", "Spanish",
    "Swedish", "Swiss", "Thai", "Turkish", "Ukrainian", "Vietnamese",
];

pub(super) static CAPITAL_CITIES: &[&str] = &[
    "Buenos Aires", "Canberra", "Vienna", "Brussels", "Brasília", "London",
    "Ottawa", "Santiago", "Beijing", "Bogotá", "Zagreb", "Prague", "Copenhagen",
    "Amsterdam", "Cairo", "Addis Ababa", "Manila", "Helsinki", "Paris", "Berlin",
    "Athens", "Budapest", "Reykjavík", "New Delhi", "Jakarta", "Dublin",
    "Jerusalem", "Rome", "Tokyo", "Nairobi", "Seoul", "Kuala Lumpur",
    "Mexico City", "Rabat", "Wellington", "Abuja", "Oslo", "Lima", "Warsaw",
    "Lisbon", "Moscow", "Singapore", "Pretoria", "Madrid", "Stockholm", "Bern",
    "Bangkok", "Ankara", "Kyiv", "Hanoi",
];

pub(super) static FLAGS: &[&str] = &[
    "🇦🇷", "🇦🇺", "🇦🇹", "🇧🇪", "🇧🇷", "🇬🇧", "🇨🇦", "🇨🇱", "🇨🇳", "🇨🇴",
    "🇭🇷", "🇨🇿", "🇩🇰", "🇳🇱", "🇪🇬", "🇪🇹", "🇵🇭", "🇫🇮", "🇫🇷", "🇩🇪",
    "🇬🇷", "🇭🇺", "🇮🇸", "🇮🇳", "🇮🇩", "🇮🇪", "🇮🇱", "🇮🇹", "🇯🇵", "🇰🇪",
    "🇰🇷", "🇲🇾", "🇲🇽", "🇲🇦", "🇳🇿", "🇳🇬", "🇳🇴", "🇵🇪", "🇵🇱", "🇵🇹",
    "🇷🇺", "🇸🇬", "🇿🇦", "🇪🇸", "🇸🇪", "🇨🇭", "🇹🇭", "🇹🇷", "🇺🇦", "🇻🇳",
];

pub(super) static LANGUAGES: &[&str] = &[
    "Amharic", "Arabic", "Bengali", "Chinese", "Croatian", "Czech", "Danish",
    "Dutch", "English", "Filipino", "Finnish", "French", "German", "Greek",
    "Hebrew", "Hindi", "Hungarian", "Icelandic", "Indonesian", "Irish",
    "Italian", "Japanese", "Korean", "Malay", "Norwegian", "Polish",
    "Portuguese", "Russian", "Spanish", "Swahili", "Swedish", "Thai",
    "Turkish", "Ukrainian", "Vietnamese", "Zulu",
];

pub(super) static CURRENCY_NAMES: &[&str] = &[
    "UAE Dirham", "Argentine Peso", "Australian Dollar", "Brazilian Real",
    "Canadian Dollar", "Swiss Franc", "Chilean Peso", "Yuan Renminbi",
    "Colombian Peso", "Czech Koruna", "Danish Krone", "Egyptian Pound",
    "Euro", "Pound Sterling", "Hong Kong Dollar", "Forint", "Rupiah",
    "New Israeli Sheqel", "Indian Rupee", "Iceland Krona", "Yen",
    "Kenyan Shilling", "Won", "Moroccan Dirham", "Mexican Peso",
    "Malaysian Ringgit", "Naira", "Norwegian Krone", "New Zealand Dollar",
    "Sol", "Philippine Peso", "Zloty", "Russian Ruble", "Saudi Riyal",
    "Swedish Krona", "Singapore Dollar", "Baht", "Turkish Lira", "Hryvnia",
    "US Dollar", "Dong", "Rand",
];

pub(super) static CURRENCY_CODES: &[&str] = &[
    "AED", "ARS", "AUD", "BRL", "CAD", "CHF", "CLP", "CNY", "COP", "CZK",
    "DKK", "EGP", "EUR", "GBP", "HKD", "HUF", "IDR", "ILS", "INR", "ISK",
    "JPY", "KES", "KRW", "MAD", "MXN", "MYR", "NGN", "NOK", "NZD", "PEN",
    "PHP", "PLN", "RUB", "SAR", "SEK", "SGD", "THB", "TRY", "UAH", "USD",
    "VND", "ZAR",
];
