use crate::models::MoodLabel;

pub fn render_index(latest: Option<MoodLabel>, entries: usize) -> String {
    let latest_label = latest.map(|mood| mood.as_str()).unwrap_or("—");
    INDEX_HTML
        .replace("{{LATEST}}", latest_label)
        .replace("{{ENTRIES}}", &entries.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>MoodSense</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f3f0fa;
      --bg-2: #d9ccf5;
      --ink: #2a2733;
      --accent: #7c5cff;
      --accent-2: #38304e;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(56, 48, 78, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e8defa 60%, #f4effa 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(880px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5a6b;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(56, 48, 78, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      display: block;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b85a0;
    }

    .stat .value {
      display: block;
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.accent {
      color: var(--accent);
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(56, 48, 78, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      appearance: none;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b6480;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(56, 48, 78, 0.12);
    }

    .view {
      display: none;
    }

    .view.active {
      display: grid;
      gap: 20px;
    }

    .mood-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(120px, 1fr));
      gap: 14px;
    }

    .mood-btn {
      appearance: none;
      border: none;
      border-radius: 18px;
      padding: 18px 12px;
      font-size: 1rem;
      font-weight: 600;
      color: white;
      cursor: pointer;
      display: grid;
      gap: 8px;
      justify-items: center;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    .mood-btn .emoji {
      font-size: 2rem;
    }

    .mood-btn:active {
      transform: scale(0.96);
    }

    .mood-btn.selected {
      outline: 3px solid var(--accent-2);
      outline-offset: 2px;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(56, 48, 78, 0.08);
    }

    .card h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    .history-row, .song-row {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 10px 12px;
      border-radius: 12px;
      background: rgba(56, 48, 78, 0.05);
      margin-bottom: 8px;
    }

    .history-row .when, .song-row .artist {
      color: #8b85a0;
      font-size: 0.9rem;
    }

    .insight-value {
      font-size: 2.2rem;
      font-weight: 600;
      color: var(--accent);
    }

    .insight-note {
      color: #6b6480;
      font-size: 0.9rem;
      margin: 4px 0 0;
    }

    .breath-wrap {
      display: grid;
      justify-items: center;
      gap: 18px;
      padding: 24px 0;
    }

    .breath-circle {
      width: 140px;
      height: 140px;
      border-radius: 50%;
      background: linear-gradient(135deg, var(--accent), #b39dff);
      display: grid;
      place-items: center;
      color: white;
      transition: transform 1s ease-in-out;
    }

    .breath-circle .count {
      font-size: 2.2rem;
      font-weight: 600;
    }

    .breath-circle .phase {
      font-size: 0.85rem;
      opacity: 0.85;
    }

    #bubble-field {
      width: 100%;
      height: 320px;
      border-radius: 18px;
      background: linear-gradient(180deg, rgba(124, 92, 255, 0.15), transparent);
      display: block;
      cursor: crosshair;
    }

    button.primary {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(124, 92, 255, 0.3);
    }

    input {
      width: 100%;
      border: 1px solid rgba(56, 48, 78, 0.15);
      border-radius: 12px;
      padding: 10px 12px;
      font-size: 1rem;
      font-family: inherit;
      margin-bottom: 10px;
    }

    .status {
      font-size: 0.95rem;
      color: #6b6480;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>MoodSense</h1>
      <p class="subtitle">Check in with your mood, watch the trend, and take a breather.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Latest mood</span>
        <span id="latest-mood" class="value accent">{{LATEST}}</span>
      </div>
      <div class="stat">
        <span class="label">Check-ins</span>
        <span id="entry-count" class="value">{{ENTRIES}}</span>
      </div>
      <div class="stat">
        <span class="label">Positive streak</span>
        <span id="streak" class="value">0</span>
      </div>
    </section>

    <nav class="tabs" role="tablist">
      <button class="tab active" data-tab="checkin">Check-in</button>
      <button class="tab" data-tab="insights">Insights</button>
      <button class="tab" data-tab="playlist">Playlist</button>
      <button class="tab" data-tab="relax">Relax</button>
      <button class="tab" data-tab="profile">Profile</button>
    </nav>

    <section id="view-checkin" class="view active">
      <div class="card">
        <h2>How are you feeling?</h2>
        <div id="mood-grid" class="mood-grid"></div>
      </div>
      <div class="card">
        <h2>Recent moods</h2>
        <div id="history"></div>
      </div>
    </section>

    <section id="view-insights" class="view">
      <div class="panel">
        <div class="card">
          <h2>Weekly average</h2>
          <div id="weekly-average" class="insight-value">0%</div>
          <p class="insight-note">Last 7 days</p>
        </div>
        <div class="card">
          <h2>Mood trend</h2>
          <div id="trend" class="insight-value">stable</div>
          <p id="trend-note" class="insight-note">Maintaining balance</p>
        </div>
        <div class="card">
          <h2>Positive streak</h2>
          <div id="streak-card" class="insight-value">0</div>
          <p class="insight-note">Consecutive positive moods</p>
        </div>
      </div>
    </section>

    <section id="view-playlist" class="view">
      <div class="card">
        <h2 id="playlist-title">Your playlist</h2>
        <div id="playlist"></div>
      </div>
    </section>

    <section id="view-relax" class="view">
      <div class="card">
        <h2>Breathing flow</h2>
        <div class="breath-wrap">
          <div id="breath-circle" class="breath-circle">
            <div>
              <div id="breath-count" class="count">4</div>
              <div id="breath-phase" class="phase">Breathe In</div>
            </div>
          </div>
          <button id="breath-toggle" class="primary" type="button">Start Breathing</button>
        </div>
      </div>
      <div class="card">
        <h2>Bubble pop <span id="bubble-score" style="float:right">Score: 0</span></h2>
        <canvas id="bubble-field"></canvas>
        <p style="margin-top:12px"><button id="bubble-toggle" class="primary" type="button">Start Game</button></p>
      </div>
    </section>

    <section id="view-profile" class="view">
      <div class="card">
        <h2>Profile</h2>
        <input id="profile-name" placeholder="Name" />
        <input id="profile-email" placeholder="Email" type="email" />
        <input id="profile-age" placeholder="Age" />
        <button id="profile-save" class="primary" type="button">Save profile</button>
      </div>
      <div class="card">
        <h2>All-time summary</h2>
        <div id="profile-summary"></div>
      </div>
    </section>

    <p id="status" class="status" role="status"></p>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const setActiveTab = (name) => {
      tabs.forEach((tab) => tab.classList.toggle('active', tab.dataset.tab === name));
      document.querySelectorAll('.view').forEach((view) => {
        view.classList.toggle('active', view.id === 'view-' + name);
      });
      if (name === 'playlist') {
        loadPlaylist().catch((err) => setStatus(err.message, 'error'));
      }
      if (name === 'profile') {
        loadProfile().catch((err) => setStatus(err.message, 'error'));
      }
    };

    tabs.forEach((tab) => {
      tab.addEventListener('click', () => setActiveTab(tab.dataset.tab));
    });

    const fetchJson = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const formatWhen = (iso) => {
      return new Date(iso).toLocaleString('en-US', {
        month: 'short', day: 'numeric', hour: '2-digit', minute: '2-digit'
      });
    };

    const renderMoodGrid = (catalog) => {
      const grid = document.getElementById('mood-grid');
      grid.innerHTML = '';
      catalog.forEach((entry) => {
        const button = document.createElement('button');
        button.className = 'mood-btn';
        button.style.background = entry.color;
        button.innerHTML = '<span class="emoji">' + entry.emoji + '</span><span>' + entry.mood + '</span>';
        button.addEventListener('click', () => recordMood(entry.mood, button));
        grid.appendChild(button);
      });
    };

    const renderHistory = (history) => {
      const box = document.getElementById('history');
      if (history.recent.length === 0) {
        box.innerHTML = '<p class="insight-note">No moods recorded yet</p>';
        return;
      }
      box.innerHTML = history.recent.map((entry) =>
        '<div class="history-row"><span>' + entry.mood +
        '</span><span class="when">' + formatWhen(entry.recorded_at) + '</span></div>'
      ).join('');
      document.getElementById('entry-count').textContent = history.total;
      document.getElementById('latest-mood').textContent = history.recent[0].mood;
    };

    const trendNotes = {
      up: 'Your mood is improving!',
      down: 'Consider self-care activities',
      stable: 'Maintaining balance'
    };

    const renderAnalytics = (snapshot) => {
      document.getElementById('weekly-average').textContent = snapshot.weekly_average + '%';
      document.getElementById('trend').textContent = snapshot.trend;
      document.getElementById('trend-note').textContent = trendNotes[snapshot.trend] || '';
      document.getElementById('streak').textContent = snapshot.positive_streak;
      document.getElementById('streak-card').textContent = snapshot.positive_streak;
    };

    const loadHistory = () => fetchJson('/api/history').then(renderHistory);
    const loadAnalytics = () => fetchJson('/api/analytics').then(renderAnalytics);

    const loadPlaylist = async () => {
      const box = document.getElementById('playlist');
      try {
        const data = await fetchJson('/api/playlist');
        document.getElementById('playlist-title').textContent = 'Your ' + data.mood + ' playlist';
        box.innerHTML = data.songs.map((song) =>
          '<div class="song-row"><span>' + song.title +
          '</span><span class="artist">' + song.artist + '</span></div>'
        ).join('');
      } catch (err) {
        document.getElementById('playlist-title').textContent = 'Your playlist';
        box.innerHTML = '<p class="insight-note">Record a mood first to get recommendations.</p>';
      }
    };

    const loadProfile = async () => {
      const data = await fetchJson('/api/profile');
      document.getElementById('profile-name').value = data.profile.name;
      document.getElementById('profile-email').value = data.profile.email;
      document.getElementById('profile-age').value = data.profile.age;
      const summary = document.getElementById('profile-summary');
      const moods = data.top_moods.map((item) => item.mood + ' (' + item.count + ')').join(', ');
      summary.innerHTML =
        '<div class="history-row"><span>Happiness</span><span>' + data.happiness_percentage + '%</span></div>' +
        '<div class="history-row"><span>Outlook</span><span>' + (data.outlook || 'N/A') + '</span></div>' +
        '<div class="history-row"><span>Check-ins</span><span>' + data.entries + '</span></div>' +
        '<div class="history-row"><span>Top moods</span><span>' + (moods || '—') + '</span></div>';
    };

    document.getElementById('profile-save').addEventListener('click', async () => {
      try {
        await fetchJson('/api/profile', {
          method: 'PUT',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            name: document.getElementById('profile-name').value,
            email: document.getElementById('profile-email').value,
            age: document.getElementById('profile-age').value
          })
        });
        setStatus('Profile saved', 'ok');
        setTimeout(() => setStatus('', ''), 1200);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    const recordMood = async (mood, button) => {
      setStatus('Saving...', 'info');
      try {
        await fetchJson('/api/mood', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ mood })
        });
        document.querySelectorAll('.mood-btn').forEach((b) => b.classList.remove('selected'));
        button.classList.add('selected');
        await Promise.all([loadHistory(), loadAnalytics()]);
        setStatus('Mood "' + mood + '" recorded', 'ok');
        setTimeout(() => setStatus('', ''), 1200);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    // Breathing flow; the phase pattern comes from /api/moods.
    const phaseLabels = { inhale: 'Breathe In', hold: 'Hold', exhale: 'Breathe Out' };
    let phases = [{ name: 'inhale', label: 'Breathe In', seconds: 4, scale: 1.4 }];
    let breathTimer = null;
    let phaseIndex = 0;
    let countdown = phases[0].seconds;
    const circle = document.getElementById('breath-circle');

    const breathTick = () => {
      countdown -= 1;
      if (countdown < 1) {
        phaseIndex = (phaseIndex + 1) % phases.length;
        countdown = phases[phaseIndex].seconds;
        document.getElementById('breath-phase').textContent = phases[phaseIndex].label;
        circle.style.transform = 'scale(' + phases[phaseIndex].scale + ')';
      }
      document.getElementById('breath-count').textContent = countdown;
    };

    document.getElementById('breath-toggle').addEventListener('click', (event) => {
      if (breathTimer) {
        clearInterval(breathTimer);
        breathTimer = null;
        circle.style.transform = 'scale(1)';
        event.target.textContent = 'Start Breathing';
        return;
      }
      phaseIndex = 0;
      countdown = phases[0].seconds;
      document.getElementById('breath-phase').textContent = phases[0].label;
      document.getElementById('breath-count').textContent = countdown;
      circle.style.transform = 'scale(' + phases[0].scale + ')';
      breathTimer = setInterval(breathTick, 1000);
      event.target.textContent = 'Stop Exercise';
    });

    // Bubble pop minigame on a canvas.
    const canvas = document.getElementById('bubble-field');
    const ctx = canvas.getContext('2d');
    const bubbleColors = ['#7c5cff', '#9d7bff', '#5cb8ff', '#5cdf9e', '#f2c94c'];
    let bubbles = [];
    let bubbleScore = 0;
    let bubbleTimer = null;

    const resizeCanvas = () => {
      canvas.width = canvas.clientWidth;
      canvas.height = canvas.clientHeight;
    };

    const spawnBubble = () => ({
      x: Math.random() * canvas.width,
      y: canvas.height + 30,
      radius: 14 + Math.random() * 22,
      color: bubbleColors[Math.floor(Math.random() * bubbleColors.length)],
      speed: 1 + Math.random() * 2
    });

    const bubbleStep = () => {
      bubbles = bubbles.filter((b) => b.y + b.radius > -10);
      bubbles.forEach((b) => { b.y -= b.speed; });
      if (Math.random() < 0.3 && bubbles.length < 15) {
        bubbles.push(spawnBubble());
      }
      ctx.clearRect(0, 0, canvas.width, canvas.height);
      bubbles.forEach((b) => {
        ctx.beginPath();
        ctx.arc(b.x, b.y, b.radius, 0, Math.PI * 2);
        ctx.fillStyle = b.color;
        ctx.globalAlpha = 0.8;
        ctx.fill();
        ctx.globalAlpha = 1;
      });
    };

    canvas.addEventListener('click', (event) => {
      if (!bubbleTimer) return;
      const rect = canvas.getBoundingClientRect();
      const x = event.clientX - rect.left;
      const y = event.clientY - rect.top;
      const hit = bubbles.findIndex((b) => {
        const dx = b.x - x;
        const dy = b.y - y;
        return dx * dx + dy * dy <= b.radius * b.radius;
      });
      if (hit >= 0) {
        bubbles.splice(hit, 1);
        bubbleScore += 10;
        document.getElementById('bubble-score').textContent = 'Score: ' + bubbleScore;
      }
    });

    document.getElementById('bubble-toggle').addEventListener('click', (event) => {
      if (bubbleTimer) {
        clearInterval(bubbleTimer);
        bubbleTimer = null;
        setStatus('Game over! Final score: ' + bubbleScore, 'ok');
        event.target.textContent = 'Start Game';
        return;
      }
      resizeCanvas();
      bubbles = [];
      bubbleScore = 0;
      document.getElementById('bubble-score').textContent = 'Score: 0';
      bubbleTimer = setInterval(bubbleStep, 50);
      event.target.textContent = 'Stop Game';
    });

    const refresh = async () => {
      const catalog = await fetchJson('/api/moods');
      renderMoodGrid(catalog.moods);
      phases = catalog.breathing.map((entry) => ({
        name: entry.phase,
        label: phaseLabels[entry.phase] || entry.phase,
        seconds: entry.seconds,
        scale: entry.phase === 'exhale' ? 1.0 : 1.4
      }));
      await Promise.all([loadHistory(), loadAnalytics()]);
    };

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
