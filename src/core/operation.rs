/// The remote operations exposed by the data service.
///
/// Each variant maps to the path segment appended to the endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    CountryList,
    DataFormats,
    ExchangeGet,
    ExchangeList,
    FundamentalList,
    QuoteGet,
    QuoteList,
    QuoteList2,
    QuoteListByDate,
    QuoteListByDate2,
    QuoteListByDatePeriod,
    QuoteListByDatePeriod2,
    SplitListByExchange,
    SplitListBySymbol,
    SymbolChangesByExchange,
    SymbolGet,
    SymbolHistory,
    SymbolHistoryPeriod,
    SymbolHistoryPeriodByDateRange,
    SymbolList,
    SymbolList2,
    TechnicalList,
    Top10Gains,
    Top10Losses,
}

impl Operation {
    /// The operation name as used in the request path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::CountryList => "CountryList",
            Self::DataFormats => "DataFormats",
            Self::ExchangeGet => "ExchangeGet",
            Self::ExchangeList => "ExchangeList",
            Self::FundamentalList => "FundamentalList",
            Self::QuoteGet => "QuoteGet",
            Self::QuoteList => "QuoteList",
            Self::QuoteList2 => "QuoteList2",
            Self::QuoteListByDate => "QuoteListByDate",
            Self::QuoteListByDate2 => "QuoteListByDate2",
            Self::QuoteListByDatePeriod => "QuoteListByDatePeriod",
            Self::QuoteListByDatePeriod2 => "QuoteListByDatePeriod2",
            Self::SplitListByExchange => "SplitListByExchange",
            Self::SplitListBySymbol => "SplitListBySymbol",
            Self::SymbolChangesByExchange => "SymbolChangesByExchange",
            Self::SymbolGet => "SymbolGet",
            Self::SymbolHistory => "SymbolHistory",
            Self::SymbolHistoryPeriod => "SymbolHistoryPeriod",
            Self::SymbolHistoryPeriodByDateRange => "SymbolHistoryPeriodByDateRange",
            Self::SymbolList => "SymbolList",
            Self::SymbolList2 => "SymbolList2",
            Self::TechnicalList => "TechnicalList",
            Self::Top10Gains => "Top10Gains",
            Self::Top10Losses => "Top10Losses",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
