use crate::domain::configuration::DataConfig;
use crate::domain::{Datasets, TableKind, load_datasets};

use super::MemoryTableSource;

pub const PROFILES_CSV: &str = "name,title,company,location,about\n\
Jane Doe,VP Engineering,Acme,\"Berlin, Germany\",Builds developer platforms.\n\
Ravi Patel,Head of Sales,Globex,Toronto,Enterprise sales leader.\n\
Lena Ortiz,Founder,Initech,Lisbon,Serial founder.\n";

pub const COMPANIES_CSV: &str = "company_name,summary,industry\n\
Acme,Widgets for every workshop,Manufacturing\n\
Globex,Logistics software,Software\n\
Acme,Duplicate Acme listing,Retail\n";

pub const NEWS_CSV: &str = "related_company,headline,date,summary\n\
Acme,Acme raises funding,2024-03-01,Series B led by Example Ventures.\n\
Initech,Initech opens Lisbon office,2024-02-10,Second European office.\n\
Acme,Acme launches new line,2024-04-12,New widget series.\n";

/// Jane resolves fully (with duplicate company and news rows), Ravi has no
/// news, Lena's company has news but no company row.
pub fn sample_source() -> MemoryTableSource {
    source(PROFILES_CSV, COMPANIES_CSV, NEWS_CSV)
}

pub fn sample_datasets() -> Datasets {
    load_datasets(&sample_source(), &DataConfig::default()).unwrap()
}

pub fn source(profiles: &str, companies: &str, news: &str) -> MemoryTableSource {
    MemoryTableSource::new()
        .with_table(TableKind::Profiles, profiles)
        .with_table(TableKind::Companies, companies)
        .with_table(TableKind::News, news)
}

pub fn datasets(profiles: &str, companies: &str, news: &str) -> Datasets {
    load_datasets(&source(profiles, companies, news), &DataConfig::default()).unwrap()
}
