use serde::Serialize;

/// A selectable company. The `name` is what the dashboard sends to the
/// origin as its lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Company {
    pub symbol: &'static str,
    pub name: &'static str,
    pub sector: &'static str,
}

const fn company(symbol: &'static str, name: &'static str, sector: &'static str) -> Company {
    Company {
        symbol,
        name,
        sector,
    }
}

/// S&P 500 constituents offered in the company picker.
pub static SP500_COMPANIES: &[Company] = &[
    company("AAPL", "Apple Inc.", "Information Technology"),
    company("MSFT", "Microsoft Corporation", "Information Technology"),
    company("AMZN", "Amazon.com, Inc.", "Consumer Discretionary"),
    company("NVDA", "NVIDIA Corporation", "Information Technology"),
    company("GOOGL", "Alphabet Inc. (Class A)", "Communication Services"),
    company("GOOG", "Alphabet Inc. (Class C)", "Communication Services"),
    company("META", "Meta Platforms, Inc.", "Communication Services"),
    company("TSLA", "Tesla, Inc.", "Consumer Discretionary"),
    company("ADBE", "Adobe Inc.", "Information Technology"),
    company("CRM", "Salesforce, Inc.", "Information Technology"),
    company("ORCL", "Oracle Corporation", "Information Technology"),
    company("INTC", "Intel Corporation", "Information Technology"),
    company("AMD", "Advanced Micro Devices, Inc.", "Information Technology"),
    company("IBM", "IBM", "Information Technology"),
    company("CSCO", "Cisco Systems, Inc.", "Information Technology"),
    company("AVGO", "Broadcom Inc.", "Information Technology"),
    company("QCOM", "Qualcomm Incorporated", "Information Technology"),
    company("SHOP", "Shopify Inc.", "Information Technology"),
    company("NOW", "ServiceNow, Inc.", "Information Technology"),
    company("SNOW", "Snowflake Inc.", "Information Technology"),
    company("JPM", "JPMorgan Chase & Co.", "Financials"),
    company("BAC", "Bank of America Corporation", "Financials"),
    company("C", "Citigroup Inc.", "Financials"),
    company("WFC", "Wells Fargo & Company", "Financials"),
    company("GS", "Goldman Sachs Group, Inc.", "Financials"),
    company("MS", "Morgan Stanley", "Financials"),
    company("SCHW", "Charles Schwab Corporation", "Financials"),
    company("AXP", "American Express Company", "Financials"),
    company("BLK", "BlackRock, Inc.", "Financials"),
    company("V", "Visa Inc.", "Information Technology"),
    company("MA", "Mastercard Incorporated", "Information Technology"),
    company("PYPL", "PayPal Holdings, Inc.", "Information Technology"),
    company("JNJ", "Johnson & Johnson", "Health Care"),
    company("PFE", "Pfizer Inc.", "Health Care"),
    company("MRK", "Merck & Co., Inc.", "Health Care"),
    company("ABBV", "AbbVie Inc.", "Health Care"),
    company("LLY", "Eli Lilly and Company", "Health Care"),
    company("AMGN", "Amgen Inc.", "Health Care"),
    company("GILD", "Gilead Sciences, Inc.", "Health Care"),
    company("MRNA", "Moderna, Inc.", "Health Care"),
    company("BMY", "Bristol Myers Squibb", "Health Care"),
    company("UNH", "UnitedHealth Group Incorporated", "Health Care"),
    company("CVS", "CVS Health Corporation", "Health Care"),
    company("WMT", "Walmart Inc.", "Consumer Staples"),
    company("COST", "Costco Wholesale Corporation", "Consumer Staples"),
    company("HD", "The Home Depot, Inc.", "Consumer Discretionary"),
    company("TGT", "Target Corporation", "Consumer Discretionary"),
    company("SBUX", "Starbucks Corporation", "Consumer Discretionary"),
    company("MCD", "McDonald's Corporation", "Consumer Discretionary"),
    company("KO", "The Coca-Cola Company", "Consumer Staples"),
    company("PEP", "PepsiCo, Inc.", "Consumer Staples"),
    company("PG", "Procter & Gamble Company", "Consumer Staples"),
    company("CL", "Colgate-Palmolive Company", "Consumer Staples"),
    company("BA", "The Boeing Company", "Industrials"),
    company("CAT", "Caterpillar Inc.", "Industrials"),
    company("GE", "General Electric Company", "Industrials"),
    company("MMM", "3M Company", "Industrials"),
    company("LMT", "Lockheed Martin Corporation", "Industrials"),
    company("NOC", "Northrop Grumman Corporation", "Industrials"),
    company("HON", "Honeywell International Inc.", "Industrials"),
    company("RTX", "Raytheon Technologies Corporation", "Industrials"),
    company("DE", "Deere & Company", "Industrials"),
    company("UPS", "United Parcel Service, Inc.", "Industrials"),
    company("FDX", "FedEx Corporation", "Industrials"),
    company("XOM", "Exxon Mobil Corporation", "Energy"),
    company("CVX", "Chevron Corporation", "Energy"),
    company("COP", "ConocoPhillips", "Energy"),
    company("SLB", "Schlumberger Limited", "Energy"),
    company("HAL", "Halliburton Company", "Energy"),
    company("BKR", "Baker Hughes Company", "Energy"),
    company("PSX", "Phillips 66", "Energy"),
    company("VLO", "Valero Energy Corporation", "Energy"),
    company("NEE", "NextEra Energy, Inc.", "Utilities"),
    company("DUK", "Duke Energy Corporation", "Utilities"),
    company("D", "Dominion Energy, Inc.", "Utilities"),
    company("SO", "Southern Company", "Utilities"),
    company("EXC", "Exelon Corporation", "Utilities"),
    company("AEP", "American Electric Power Company, Inc.", "Utilities"),
    company("VZ", "Verizon Communications Inc.", "Communication Services"),
    company("T", "AT&T Inc.", "Communication Services"),
    company("TMUS", "T-Mobile US, Inc.", "Communication Services"),
    company("CMCSA", "Comcast Corporation", "Communication Services"),
    company("CHTR", "Charter Communications, Inc.", "Communication Services"),
    company("ABNB", "Airbnb, Inc.", "Consumer Discretionary"),
    company("UBER", "Uber Technologies, Inc.", "Technology"),
    company("LYFT", "Lyft, Inc.", "Technology"),
    company("DAL", "Delta Air Lines, Inc.", "Industrials"),
    company("AAL", "American Airlines Group Inc.", "Industrials"),
    company("UAL", "United Airlines Holdings, Inc.", "Industrials"),
    company("MAR", "Marriott International, Inc.", "Consumer Discretionary"),
    company("HLT", "Hilton Worldwide Holdings Inc.", "Consumer Discretionary"),
];

pub fn all_companies() -> &'static [Company] {
    SP500_COMPANIES
}

/// Case-insensitive lookup by ticker symbol.
pub fn find_by_symbol(symbol: &str) -> Option<&'static Company> {
    SP500_COMPANIES
        .iter()
        .find(|c| c.symbol.eq_ignore_ascii_case(symbol))
}

/// Exact lookup by company name, the same way the origin is keyed.
pub fn find_by_name(name: &str) -> Option<&'static Company> {
    SP500_COMPANIES.iter().find(|c| c.name == name)
}
