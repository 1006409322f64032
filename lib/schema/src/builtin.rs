//! Built-in instrument catalogue

/// `(type name, full keys, mandatory keys)`
pub(crate) type InstrumentLayout = (&'static str, &'static [&'static str], &'static [&'static str]);

pub(crate) const INSTRUMENT_TYPES: &[InstrumentLayout] = &[
    (
        "InterestRateSwap",
        &[
            "instrumentType", "tradeId", "firmId", "accountId", "currency",
            "effectiveDate", "maturityDate", "notional", "direction",
            "payLeg", "receiveLeg", "dayCountConvention", "businessDayConvention",
        ],
        &[
            "effectiveDate", "maturityDate", "notional", "payLeg", "receiveLeg",
            "dayCountConvention", "firmId",
        ],
    ),
    (
        "CrossCurrencySwap",
        &[
            "instrumentType", "tradeId", "firmId", "accountId", "payCurrency",
            "receiveCurrency", "effectiveDate", "maturityDate", "payNotional",
            "receiveNotional", "payLeg", "receiveLeg", "exchangeRates",
            "businessDayConvention",
        ],
        &[
            "payCurrency", "receiveCurrency", "payNotional", "receiveNotional",
            "effectiveDate", "maturityDate", "payLeg", "receiveLeg", "exchangeRates",
        ],
    ),
    (
        "AmortisedScheduleSwap",
        &[
            "instrumentType", "tradeId", "firmId", "accountId", "currency",
            "effectiveDate", "maturityDate", "notionalSchedule", "amortizationMethod",
            "payLeg", "receiveLeg", "businessDayConvention",
        ],
        &[
            "amortizationMethod", "notionalSchedule", "effectiveDate", "maturityDate",
            "payLeg", "receiveLeg",
        ],
    ),
    (
        "MoneyMarketDeposit",
        &[
            "instrumentType", "tradeId", "firmId", "accountId", "currency",
            "depositDate", "maturityDate", "principal", "interestRate",
            "interestCalculation", "dayCountConvention", "businessDayConvention",
        ],
        &["principal", "depositDate", "maturityDate", "interestRate", "dayCountConvention"],
    ),
    (
        "SingleSpreadOption",
        &[
            "instrumentType", "tradeId", "firmId", "accountId", "underlying",
            "optionType", "strike", "spread", "notional", "currency",
            "expiryDate", "settlementDate", "dayCountConvention", "businessDayConvention",
        ],
        &["underlying", "strike", "spread", "expiryDate", "optionType"],
    ),
    (
        "FXDigital",
        &[
            "instrumentType", "tradeId", "firmId", "accountId", "payCurrency",
            "receiveCurrency", "payAmount", "receiveAmount", "strikeRate",
            "expiryDate", "settlementDate", "optionType", "dayCountConvention",
            "businessDayConvention",
        ],
        &[
            "payCurrency", "receiveCurrency", "strikeRate", "expiryDate",
            "payAmount", "receiveAmount", "optionType",
        ],
    ),
];

/// `(alias, canonical)`, in precedence order
pub(crate) const KEY_ALIASES: &[(&str, &str)] = &[
    ("termination date", "maturityDate"),
    ("end date", "maturityDate"),
    ("maturity", "maturityDate"),
    ("start date", "effectiveDate"),
    ("value date", "effectiveDate"),
    ("effective start date", "effectiveDate"),
    ("trade date", "tradeDate"),
    ("notional amount", "notional"),
    ("business day convention", "businessDayConvention"),
    ("day count basis", "dayCountConvention"),
    ("day count fraction", "dayCountConvention"),
    ("payment frequency", "paymentFrequency"),
    ("fixed rate", "payLeg"),
    ("floating rate index", "receiveLeg"),
    ("principal amount", "principal"),
    ("issue date", "depositDate"),
    ("rate", "interestRate"),
    ("expiration date", "expiryDate"),
    ("option expiry", "expiryDate"),
    ("expiry", "expiryDate"),
    ("settlement", "settlementDate"),
    ("underlying asset", "underlying"),
    ("strike price", "strike"),
    ("payment currency", "payCurrency"),
    ("receipt currency", "receiveCurrency"),
    ("fx rate", "exchangeRates"),
    ("spot rate", "exchangeRates"),
    ("barrier level", "strikeRate"),
    ("payout amount", "payAmount"),
    ("party a", "firmId"),
    ("party b", "counterpartyId"),
];
