//! Weekly rewards leaderboard table.

use leptos::prelude::*;

/// Payout for one leaderboard position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardRow {
    /// 1-based leaderboard position
    pub rank: u8,
    /// Payout in USDT
    pub reward: u32,
}

/// Top five weekly payouts, in rank order.
pub const REWARDS: [RewardRow; 5] = [
    RewardRow { rank: 1, reward: 50 },
    RewardRow { rank: 2, reward: 30 },
    RewardRow { rank: 3, reward: 20 },
    RewardRow { rank: 4, reward: 10 },
    RewardRow { rank: 5, reward: 5 },
];

const HEADER_CELL: &str =
    "px-6 py-4 border-b-2 border-gray-700 bg-gray-800 text-left text-sm font-semibold";
const BODY_CELL: &str = "px-6 py-4 border-b border-gray-700 text-sm";

#[component]
pub fn RewardTable(rows: &'static [RewardRow]) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full bg-gray-900 text-white rounded-lg shadow-lg">
                <thead>
                    <tr>
                        <th class=HEADER_CELL>"Rank"</th>
                        <th class=HEADER_CELL>"Reward (USDT)"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td class=BODY_CELL>{row.rank.to_string()}</td>
                                    <td class=BODY_CELL>{format!("{} USDT", row.reward)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn rewards_are_ranked_one_to_five() {
        let ranks: Vec<u8> = REWARDS.iter().map(|row| row.rank).collect();
        let payouts: Vec<u32> = REWARDS.iter().map(|row| row.reward).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
        assert_eq!(payouts, vec![50, 30, 20, 10, 5]);
    }

    #[test]
    fn renders_exactly_five_rows_in_rank_order() {
        let html = view! { <RewardTable rows=&REWARDS /> }.to_html();

        let body = html
            .split("<tbody>")
            .nth(1)
            .and_then(|rest| rest.split("</tbody>").next())
            .expect("tbody");
        assert_eq!(body.matches("<tr").count(), 5);

        let positions: Vec<usize> = ["50 USDT", "30 USDT", "20 USDT", "10 USDT", "5 USDT"]
            .iter()
            .map(|needle| body.find(needle).expect(needle))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(html.contains("Reward (USDT)"));
    }
}
