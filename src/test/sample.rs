#[cfg(test)]
mod tests {
    use chrono::{Datelike, Local, NaiveDate};
    use rust_decimal_macros::dec;

    use crate::{
        app::{ExchangeSample, plot::HIST_Y_LABEL},
        error::{ExchangeError, Result},
        models::{Currency, HalfYear, Month, View},
        test::support::mocks::{MockSource, RecordingRenderer},
    };

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn month(label: &str) -> Month {
        label.parse().unwrap()
    }

    fn half_year_from_text(
        sample: &ExchangeSample<MockSource>,
        part: &str,
        view: &str,
        renderer: &mut RecordingRenderer,
    ) -> Result<()> {
        let part = part.parse::<HalfYear>()?;
        let view = view.parse::<View>()?;
        sample.half_year_information(part, view, renderer)
    }

    fn month_from_text(
        sample: &ExchangeSample<MockSource>,
        month: &str,
        view: &str,
        renderer: &mut RecordingRenderer,
    ) -> Result<()> {
        let month = month.parse::<Month>()?;
        let view = view.parse::<View>()?;
        sample.month_information(month, view, renderer)
    }

    #[test]
    fn construction_validates_the_base_currency() {
        for code in ["UAH", "USD", "RUB", "EUR"] {
            assert!(ExchangeSample::from_code(code, MockSource::new(dec!(1))).is_ok());
        }
        for code in ["GBP", "usd", " eur "] {
            assert!(matches!(
                ExchangeSample::from_code(code, MockSource::new(dec!(1))),
                Err(ExchangeError::UnavailableCurrency(_))
            ));
        }
    }

    #[test]
    fn new_sample_is_empty() {
        let sample = ExchangeSample::hryvna(MockSource::new(dec!(1)));

        assert_eq!(sample.base_currency(), Currency::Uah);
        assert_eq!(sample.counter_currency(), None);
        assert_eq!(sample.year(), None);
        assert!(sample.changes().is_empty());
    }

    #[tokio::test]
    async fn out_of_range_years_fail_before_any_fetch() {
        let mut sample = ExchangeSample::hryvna(MockSource::new(dec!(1)));
        let next_year = Local::now().year() + 1;

        for year in [1999, 1900, next_year] {
            assert!(matches!(
                sample.generate(Currency::Usd, year).await,
                Err(ExchangeError::IncorrectDate(_))
            ));
        }
        assert!(matches!(
            sample.generate_from_str("USD", "not a year").await,
            Err(ExchangeError::IncorrectDate(_))
        ));
        assert!(matches!(
            sample.generate_from_str("GBP", "2020").await,
            Err(ExchangeError::UnavailableCurrency(_))
        ));

        assert!(sample.source().calls().is_empty());
        assert_eq!(sample.year(), None);
    }

    #[tokio::test]
    async fn leap_february_is_fetched_day_by_day() {
        let mut sample = ExchangeSample::hryvna(MockSource::new(dec!(8)));
        sample.generate(Currency::Usd, 2020).await.unwrap();

        assert_eq!(sample.source().calls_in_month(2), 29);
        assert_eq!(sample.source().calls().len(), 366);

        let mut sample = ExchangeSample::hryvna(MockSource::new(dec!(8)));
        sample.generate(Currency::Usd, 2021).await.unwrap();

        assert_eq!(sample.source().calls_in_month(2), 28);
        assert_eq!(sample.source().calls().len(), 365);
    }

    #[tokio::test]
    async fn days_are_requested_in_calendar_order() {
        let mut sample = ExchangeSample::hryvna(MockSource::new(dec!(8)));
        sample.generate(Currency::Eur, 2019).await.unwrap();

        let calls = sample.source().calls();
        assert_eq!(calls.first(), Some(&date(2019, 1, 1)));
        assert_eq!(calls.last(), Some(&date(2019, 12, 31)));
        assert!(calls.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn generate_fills_all_twelve_months() {
        let mut sample = ExchangeSample::hryvna(MockSource::new(dec!(26)));
        sample.generate_from_str("USD", "2021").await.unwrap();

        assert_eq!(sample.counter_currency(), Some(Currency::Usd));
        assert_eq!(sample.year(), Some(2021));

        let keys: Vec<&String> = sample.changes().months().map(|(key, _)| key).collect();
        let expected: Vec<String> = Month::all().map(|m| m.label()).collect();
        assert_eq!(keys, expected.iter().collect::<Vec<_>>());

        let march = sample.changes().month(month("03")).unwrap();
        assert_eq!(march.len(), 31);
        assert_eq!(march.get("05.03.2021"), Some(&dec!(26.05)));
        assert_eq!(march.keys().next().unwrap(), "01.03.2021");

        for m in Month::all() {
            assert!(sample.month_plot(m, View::Timeline).is_ok());
        }
    }

    #[tokio::test]
    async fn days_without_data_are_left_out() {
        let source = MockSource::new(dec!(26)).missing(date(2021, 6, 12));
        let mut sample = ExchangeSample::hryvna(source);
        sample.generate(Currency::Usd, 2021).await.unwrap();

        let june = sample.changes().month(month("06")).unwrap();
        assert_eq!(june.len(), 29);
        assert!(!june.contains_key("12.06.2021"));

        let plot = sample.month_plot(month("06"), View::Timeline).unwrap();
        assert_eq!(plot.points().len(), 29);
        assert!(!plot.labels().contains(&"12"));
    }

    #[tokio::test]
    async fn text_queries_reject_bad_selectors_and_views() {
        let mut sample = ExchangeSample::hryvna(MockSource::new(dec!(26)));
        sample.generate(Currency::Usd, 2021).await.unwrap();
        let mut renderer = RecordingRenderer::default();

        assert!(matches!(
            half_year_from_text(&sample, "I", "bar", &mut renderer),
            Err(ExchangeError::IncorrectPlotType(kind)) if kind == "bar"
        ));
        assert!(matches!(
            half_year_from_text(&sample, "III", "hist", &mut renderer),
            Err(ExchangeError::IncorrectDate(_))
        ));
        assert!(matches!(
            month_from_text(&sample, "13", "timeline", &mut renderer),
            Err(ExchangeError::IncorrectDate(_))
        ));
        assert!(matches!(
            month_from_text(&sample, "03", "pie", &mut renderer),
            Err(ExchangeError::IncorrectPlotType(_))
        ));
        assert!(renderer.plots.is_empty());

        half_year_from_text(&sample, "II", "hist", &mut renderer).unwrap();
        month_from_text(&sample, "03", "timeline", &mut renderer).unwrap();
        assert_eq!(renderer.plots.len(), 2);
        assert_eq!(*renderer.plots[0].bins(), 6);
        assert_eq!(renderer.plots[1].points().len(), 31);
    }

    #[tokio::test]
    async fn queries_before_generate_fail() {
        let sample = ExchangeSample::hryvna(MockSource::new(dec!(1)));
        let mut renderer = RecordingRenderer::default();

        assert!(matches!(
            sample.year_information(View::Hist, &mut renderer),
            Err(ExchangeError::NotGeneratedYet)
        ));
        assert!(matches!(
            sample.half_year_information(HalfYear::First, View::Timeline, &mut renderer),
            Err(ExchangeError::NotGeneratedYet)
        ));
        assert!(matches!(
            sample.month_information(month("01"), View::Hist, &mut renderer),
            Err(ExchangeError::NotGeneratedYet)
        ));
        assert!(renderer.plots.is_empty());
    }

    #[tokio::test]
    async fn source_failure_aborts_and_keeps_finished_months() {
        let source = MockSource::new(dec!(26)).failing_on(date(2021, 4, 10));
        let mut sample = ExchangeSample::hryvna(source);

        let result = sample.generate(Currency::Usd, 2021).await;

        assert!(matches!(result, Err(ExchangeError::Source(_))));
        assert_eq!(sample.source().calls().last(), Some(&date(2021, 4, 10)));
        assert_eq!(sample.changes().len(), 3);
        assert!(sample.changes().month(month("04")).is_none());
        assert_eq!(sample.year(), Some(2021));
        assert_eq!(sample.counter_currency(), Some(Currency::Usd));

        // finished months still answer, unfinished ones do not
        assert!(sample.month_plot(month("02"), View::Hist).is_ok());
        assert!(sample.year_plot(View::Timeline).is_ok());
        assert!(matches!(
            sample.half_year_plot(HalfYear::First, View::Timeline),
            Err(ExchangeError::NotGeneratedYet)
        ));
    }

    #[tokio::test]
    async fn regenerate_replaces_previous_results() {
        let mut sample = ExchangeSample::hryvna(MockSource::new(dec!(26)));
        sample.generate(Currency::Usd, 2020).await.unwrap();
        sample.source().reset();
        sample.generate(Currency::Eur, 2021).await.unwrap();

        assert_eq!(sample.year(), Some(2021));
        assert_eq!(sample.counter_currency(), Some(Currency::Eur));
        assert_eq!(sample.changes().len(), 12);
        assert_eq!(sample.changes().month(month("02")).unwrap().len(), 28);
        assert!(
            sample
                .changes()
                .months()
                .flat_map(|(_, days)| days.keys())
                .all(|label| label.ends_with("2021"))
        );
    }

    #[tokio::test]
    async fn year_plot_averages_each_month() {
        let mut sample = ExchangeSample::hryvna(MockSource::new(dec!(26)));
        sample.generate(Currency::Usd, 2021).await.unwrap();

        let plot = sample.year_plot(View::Timeline).unwrap();

        assert_eq!(plot.points().len(), 12);
        assert_eq!(plot.labels()[0], "01");
        assert_eq!(plot.labels()[11], "12");
        // days 1..=31 average to 16, so January is 26.16
        assert!((plot.values()[0] - 26.16).abs() < 1e-9);
        // days 1..=28 average to 14.5
        assert!((plot.values()[1] - 26.145).abs() < 1e-9);
        assert_eq!(*plot.bins(), 12);
        assert_eq!(
            plot.title(),
            "Information about UAH to USD exchange rate in 2021 year"
        );
        assert_eq!(plot.x_label(), "Months");
        assert_eq!(plot.y_label(), "UAH exchange rate");
    }

    #[tokio::test]
    async fn half_year_plot_covers_six_months() {
        let mut sample = ExchangeSample::hryvna(MockSource::new(dec!(26)));
        sample.generate(Currency::Usd, 2021).await.unwrap();

        let plot = sample.half_year_plot(HalfYear::Second, View::Hist).unwrap();

        assert_eq!(plot.labels(), vec!["07", "08", "09", "10", "11", "12"]);
        assert_eq!(*plot.bins(), 6);
        assert_eq!(plot.y_label(), HIST_Y_LABEL);
        assert_eq!(
            plot.title(),
            "Information about UAH to USD exchange rate in the II half of the 2021 year"
        );
    }

    #[tokio::test]
    async fn month_plot_lists_every_day() {
        let mut sample = ExchangeSample::hryvna(MockSource::new(dec!(26)));
        sample.generate(Currency::Rub, 2020).await.unwrap();

        let plot = sample.month_plot(month("02"), View::Timeline).unwrap();

        assert_eq!(plot.points().len(), 29);
        assert_eq!(plot.labels()[0], "01");
        assert_eq!(plot.labels()[28], "29");
        assert!((plot.values()[28] - 26.29).abs() < 1e-9);
        assert_eq!(plot.x_label(), "Days of the 02.2020");
        assert_eq!(
            plot.title(),
            "Information about UAH to RUB exchange rate as of 02.2020"
        );
    }

    #[tokio::test]
    async fn empty_months_are_left_out_of_means() {
        let mut source = MockSource::new(dec!(26));
        for day in 1..=28 {
            source = source.missing(date(2021, 2, day));
        }
        let mut sample = ExchangeSample::hryvna(source);
        sample.generate(Currency::Usd, 2021).await.unwrap();

        assert!(sample.changes().month(month("02")).unwrap().is_empty());

        let plot = sample.year_plot(View::Timeline).unwrap();
        assert_eq!(plot.points().len(), 11);
        assert!(!plot.labels().contains(&"02"));

        assert!(matches!(
            sample.month_plot(month("02"), View::Hist),
            Err(ExchangeError::EmptySample)
        ));
    }

    #[tokio::test]
    async fn information_hands_the_plot_to_the_renderer() {
        let mut sample = ExchangeSample::hryvna(MockSource::new(dec!(26)));
        sample.generate(Currency::Usd, 2021).await.unwrap();
        let mut renderer = RecordingRenderer::default();

        sample.year_information(View::Hist, &mut renderer).unwrap();
        sample
            .half_year_information(HalfYear::First, View::Timeline, &mut renderer)
            .unwrap();
        sample
            .month_information(month("11"), View::Hist, &mut renderer)
            .unwrap();

        assert_eq!(renderer.plots.len(), 3);
        assert_eq!(*renderer.plots[0].view(), View::Hist);
        assert_eq!(renderer.plots[1].points().len(), 6);
        assert_eq!(renderer.plots[2].points().len(), 30);
    }

    #[test]
    fn middle_value_is_exposed_on_the_sample() {
        assert_eq!(
            ExchangeSample::<MockSource>::middle_value(&[dec!(2), dec!(4)]).unwrap(),
            dec!(3)
        );
        assert!(matches!(
            ExchangeSample::<MockSource>::middle_value(&[]),
            Err(ExchangeError::EmptySample)
        ));
    }
}
